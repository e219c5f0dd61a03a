use core::fmt;

use crate::bitcoin::base58;

pub(crate) const LEGACY_DECODE_FAILED: &str = "Could not decode legacy address";
pub(crate) const UNKNOWN_VERSION: &str = "Could not determine address version";
pub(crate) const MIXED_CASE: &str = "Cash address contains uppercase and lowercase characters";
pub(crate) const BAD_CHECKSUM: &str = "Bad cash address checksum";
pub(crate) const BAD_BIT_CONVERSION: &str = "Invalid bit conversion";
pub(crate) const BAD_PAYLOAD_LENGTH: &str = "Invalid payload length";
pub(crate) const EXPECTED_STRING: &str = "Expected string as input";

/// Every failure in this crate is an invalid address; the message names the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    InvalidAddress(String),
}

impl AddressError {
    pub fn new(msg: &str) -> AddressError {
        AddressError::InvalidAddress(msg.to_string())
    }

    /// The cause without the "Invalid address" preamble.
    pub fn message(&self) -> &str {
        match self {
            AddressError::InvalidAddress(msg) => msg,
        }
    }
}

impl std::error::Error for AddressError {}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidAddress(msg) => write!(f, "Invalid address: {}", msg),
        }
    }
}

impl From<base58::Error> for AddressError {
    fn from(_: base58::Error) -> Self {
        AddressError::new(LEGACY_DECODE_FAILED)
    }
}

impl From<base58::InvalidCharacterError> for AddressError {
    fn from(_: base58::InvalidCharacterError) -> Self {
        AddressError::new(LEGACY_DECODE_FAILED)
    }
}

pub type Result<T> = std::result::Result<T, AddressError>;
