//! CashAddr checksum and Base32 body alphabet.
//!
//! Implements the cashaddr checksum algorithm as defined in:
//! - Spec: https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
//! - Reference implementation: https://github.com/Bitcoin-ABC/bitcoin-abc/blob/master/src/cashaddr.cpp
//!
//! CashAddr shares the Bech32 alphabet but not its checksum. The differences that matter here:
//!
//! | | Bech32/Bech32m | CashAddr |
//! |---|---|---|
//! | Separator | `1` | `:` (optional) |
//! | Checksum | 6 symbols (30 bits) | 8 symbols (40 bits) |
//! | Prefix expansion | `[b>>5...] + [0] + [b&31...]` | `[b&31...] + [0]` |
//! | Padding | Lenient | Strict (must be zero) |
//!
//! Only `Fe32` is taken from the bech32 crate, for the symbol/character mapping. Its
//! checksum engines and bit-packing iterators implement Bech32 rules and would produce
//! wrong results for CashAddr.

use bech32::Fe32;

use crate::error::{AddressError, Result, BAD_BIT_CONVERSION, BAD_CHECKSUM};

/// Base32 alphabet of the CashAddr body, indexed by symbol value.
pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Number of 5-bit symbols in the checksum.
pub const CHECKSUM_LENGTH: usize = 8;

/// (bit of the shifted-out top symbol, 40-bit generator) pairs.
const GENERATORS: [(u8, u64); 5] = [
    (0x01, 0x98f2bc8e61),
    (0x02, 0x79b76d99e2),
    (0x04, 0xf33e5fb3c4),
    (0x08, 0xae2eabe2a8),
    (0x10, 0x1e4f43e470),
];

/// Run the CashAddr BCH accumulator over 5-bit `values`.
///
/// The 40-bit state starts at 1. For each value the top 5 bits are shifted out, the
/// remaining 35 bits are shifted left by 5 and the value is xored in, then each generator
/// whose bit is set in the shifted-out symbol is xored into the state. The result is the
/// final state xored with 1, so a valid string produces 0.
pub fn polymod(values: &[u8]) -> u64 {
    let mut chk: u64 = 1;
    for &value in values {
        let top = (chk >> 35) as u8;
        chk = ((chk & 0x07_ffff_ffff) << 5) ^ (value as u64);

        for &(bit, generator) in GENERATORS.iter() {
            if top & bit != 0 {
                chk ^= generator;
            }
        }
    }

    chk ^ 1
}

/// Expand a prefix for checksum calculation: the lower 5 bits of every character's code
/// point, followed by a zero separator.
pub fn prefix_expand(prefix: &str) -> Vec<u8> {
    let mut result: Vec<u8> = prefix.chars().map(|c| (c as u32 & 0x1f) as u8).collect();
    result.push(0);
    result
}

/// Checksum symbols for `payload` (already in 5-bit groups), most significant first.
pub fn calculate_checksum(prefix: &str, payload: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut data = prefix_expand(prefix);
    data.extend_from_slice(payload);
    data.extend_from_slice(&[0; CHECKSUM_LENGTH]);

    let poly = polymod(&data);
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((poly >> (5 * (CHECKSUM_LENGTH - 1 - i))) & 0x1f) as u8;
    }
    checksum
}

/// True when `data`, which ends with the checksum symbols, checks out under `prefix`.
pub fn verify_checksum(prefix: &str, data: &[u8]) -> bool {
    let mut values = prefix_expand(prefix);
    values.extend_from_slice(data);
    polymod(&values) == 0
}

/// Map 5-bit symbols to body characters.
pub fn b32encode(symbols: &[u8]) -> Result<String> {
    symbols
        .iter()
        .map(|&symbol| {
            Fe32::try_from(symbol)
                .map(Fe32::to_char)
                .map_err(|_| AddressError::new(BAD_BIT_CONVERSION))
        })
        .collect()
}

/// Map body characters to 5-bit symbols.
///
/// A character outside the alphabet has no symbol and fails the body as a whole.
/// Case is not checked here; callers reject mixed case and lowercase first.
pub fn b32decode(body: &str) -> Result<Vec<u8>> {
    body.chars()
        .map(|ch| {
            Fe32::from_char(ch)
                .map(Fe32::to_u8)
                .map_err(|_| AddressError::new(BAD_CHECKSUM))
        })
        .collect()
}
