//! Regrouping of bit strings between 8-bit bytes and 5-bit CashAddr symbols.

use crate::error::{AddressError, Result, BAD_BIT_CONVERSION};

/// Regroup `data`, read as `from_bits`-wide big-endian words, into `to_bits`-wide words.
///
/// With `pad` set, leftover bits are left-shifted into one final word. Without it the
/// leftover must be shorter than `from_bits` and all zero, which is how CashAddr rejects
/// malleated padding when unpacking a body back into bytes.
///
/// # Example
/// `[0xFF, 0x01]` from 8 to 5 bits with padding:
/// - 11111 = 31
/// - 11100 = 28
/// - 00000 = 0
/// - remaining 1 bit (1) padded: 10000 = 16
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    if from_bits == 0 || from_bits > 8 || to_bits == 0 || to_bits > 8 {
        return Err(AddressError::new(BAD_BIT_CONVERSION));
    }

    let max_value: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        let value = value as u32;
        if value >> from_bits != 0 {
            return Err(AddressError::new(BAD_BIT_CONVERSION));
        }
        acc = ((acc << from_bits) | value) & max_acc;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || ((acc << (to_bits - bits)) & max_value) != 0 {
        return Err(AddressError::new(BAD_BIT_CONVERSION));
    }

    Ok(result)
}
