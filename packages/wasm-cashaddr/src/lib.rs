mod address;
mod bits;
mod checksum;
mod convert;
mod error;
pub mod wasm;

// re-export bitcoin from the miniscript crate
// base58 and the sha256d digest of legacy addresses come from here
pub use ::miniscript::bitcoin;

pub use address::{
    Address, AddressFormat, AddressVersion, Network, DEFAULT_PREFIX, DIGEST_LENGTH, HASH_LENGTH,
    TESTNET_PREFIX,
};
pub use bits::convert_bits;
pub use checksum::{
    b32decode, b32encode, calculate_checksum, polymod, prefix_expand, verify_checksum, CHARSET,
    CHECKSUM_LENGTH,
};
pub use convert::{convert_address, display_address, is_valid, to_cash_address, to_legacy_address};
pub use error::AddressError;
pub use wasm::CashAddrNamespace;
