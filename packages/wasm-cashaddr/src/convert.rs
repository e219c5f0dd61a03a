//! String-to-string conversions over [`Address`].
//!
//! Each function parses its input from either encoding, so any accepted address can be
//! converted to any format.

use crate::address::{Address, AddressFormat};
use crate::error::Result;

/// Convert a legacy or cashaddr address to cashaddr.
pub fn to_cash_address(address: &str) -> Result<String> {
    Address::parse(address)?.to_cash_string()
}

/// Convert a legacy or cashaddr address to legacy Base58Check.
pub fn to_legacy_address(address: &str) -> Result<String> {
    Address::parse(address)?.to_legacy_string()
}

/// Convert an address to the requested format.
pub fn convert_address(address: &str, format: AddressFormat) -> Result<String> {
    Address::parse(address)?.to_string_with_format(format)
}

/// True if `address` parses in either encoding.
pub fn is_valid(address: &str) -> bool {
    Address::parse(address).is_ok()
}

/// Cashaddr form without the `prefix:` part.
pub fn display_address(address: &str) -> Result<String> {
    let cash_address = to_cash_address(address)?;
    Ok(match cash_address.rsplit_once(':') {
        Some((_, body)) => body.to_string(),
        None => cash_address,
    })
}
