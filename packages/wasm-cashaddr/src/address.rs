//! Canonical Bitcoin Cash address and its two textual encodings.
//!
//! - **Base58Check** (legacy): `base58(version_byte ‖ hash ‖ sha256d(version_byte ‖ hash)[..4])`
//! - **Cashaddr**: `prefix:base32(convert_bits(type_byte ‖ hash) ‖ checksum)`
//!
//! Both encodings carry the same (version, hash, prefix) identity. Parsing either one
//! yields an [`Address`], which can then be written out in either format.

use std::fmt;
use std::str::FromStr;

use crate::bitcoin::base58;
use crate::bitcoin::hashes::{sha256d, Hash};
use crate::bits::convert_bits;
use crate::checksum::{b32decode, b32encode, calculate_checksum, verify_checksum, CHECKSUM_LENGTH};
use crate::error::{
    AddressError, Result, BAD_CHECKSUM, BAD_PAYLOAD_LENGTH, LEGACY_DECODE_FAILED, MIXED_CASE,
    UNKNOWN_VERSION,
};

/// Cashaddr prefix of Bitcoin Cash mainnet, assumed when an address omits it.
pub const DEFAULT_PREFIX: &str = "bitcoincash";
/// Cashaddr prefix of Bitcoin Cash testnet.
pub const TESTNET_PREFIX: &str = "bchtest";

/// Length of the P2PKH/P2SH hash carried by both encodings.
pub const HASH_LENGTH: usize = 20;
/// Length of the double-SHA256 digest trailing a legacy address.
pub const DIGEST_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressVersion {
    P2SH,
    P2PKH,
    P2SHTestnet,
    P2PKHTestnet,
}

// Version codes per encoding (values from src/chainparams.cpp and cashaddr.md).
// Lookups by code take the first matching row, so the cashaddr table resolves to the
// mainnet kinds and the prefix decides the network.
//
// https://github.com/bitcoin-cash-node/bitcoin-cash-node/blob/master/src/chainparams.cpp
const LEGACY_VERSIONS: [(AddressVersion, u8); 4] = [
    (AddressVersion::P2SH, 0x05),
    (AddressVersion::P2PKH, 0x00),
    (AddressVersion::P2SHTestnet, 0xc4),
    (AddressVersion::P2PKHTestnet, 0x6f),
];

// https://github.com/bitcoincashorg/bitcoincash.org/blob/master/spec/cashaddr.md
const CASHADDR_VERSIONS: [(AddressVersion, u8); 4] = [
    (AddressVersion::P2SH, 0x08),
    (AddressVersion::P2PKH, 0x00),
    (AddressVersion::P2SHTestnet, 0x08),
    (AddressVersion::P2PKHTestnet, 0x00),
];

impl AddressVersion {
    pub const ALL: &'static [AddressVersion] = &[
        AddressVersion::P2SH,
        AddressVersion::P2PKH,
        AddressVersion::P2SHTestnet,
        AddressVersion::P2PKHTestnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AddressVersion::P2SH => "P2SH",
            AddressVersion::P2PKH => "P2PKH",
            AddressVersion::P2SHTestnet => "P2SHTestnet",
            AddressVersion::P2PKHTestnet => "P2PKHTestnet",
        }
    }

    pub fn is_p2sh(&self) -> bool {
        matches!(self, AddressVersion::P2SH | AddressVersion::P2SHTestnet)
    }

    pub fn is_testnet(&self) -> bool {
        matches!(
            self,
            AddressVersion::P2SHTestnet | AddressVersion::P2PKHTestnet
        )
    }

    /// The same script type on `network`.
    pub fn for_network(self, network: Network) -> AddressVersion {
        match (self.is_p2sh(), network) {
            (true, Network::Mainnet) => AddressVersion::P2SH,
            (false, Network::Mainnet) => AddressVersion::P2PKH,
            (true, Network::Testnet) => AddressVersion::P2SHTestnet,
            (false, Network::Testnet) => AddressVersion::P2PKHTestnet,
        }
    }

    /// Version code of this kind in `format`.
    pub fn code(&self, format: AddressFormat) -> Result<u8> {
        format
            .version_table()
            .iter()
            .find(|(version, _)| version == self)
            .map(|&(_, code)| code)
            .ok_or_else(|| AddressError::new(UNKNOWN_VERSION))
    }

    /// Kind for a version code read from an address in `format`.
    pub fn from_code(format: AddressFormat, code: u8) -> Result<AddressVersion> {
        format
            .version_table()
            .iter()
            .find(|&&(_, c)| c == code)
            .map(|&(version, _)| version)
            .ok_or_else(|| AddressError::new(UNKNOWN_VERSION))
    }
}

impl fmt::Display for AddressVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Textual encoding of an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFormat {
    /// Base58Check with a one-byte version and trailing digest.
    Legacy,
    /// `prefix:body` with an embedded polymod checksum.
    Cashaddr,
}

impl AddressFormat {
    fn version_table(self) -> &'static [(AddressVersion, u8)] {
        match self {
            AddressFormat::Legacy => &LEGACY_VERSIONS,
            AddressFormat::Cashaddr => &CASHADDR_VERSIONS,
        }
    }

    /// Parse an AddressFormat from an optional string.
    /// Returns Cashaddr if None or if the string is empty.
    pub fn from_optional_str(s: Option<&str>) -> Result<Self> {
        match s {
            None | Some("") | Some("cashaddr") => Ok(Self::Cashaddr),
            Some("legacy") | Some("base58") => Ok(Self::Legacy),
            Some(other) => Err(AddressError::InvalidAddress(format!(
                "Unknown address format: {}. Valid formats are: 'cashaddr', 'legacy'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn prefix(&self) -> &'static str {
        match self {
            Network::Mainnet => DEFAULT_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }

    /// Network for a cashaddr prefix. Prefixes other than the testnet one count as mainnet.
    pub fn from_prefix(prefix: &str) -> Network {
        if prefix == TESTNET_PREFIX {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Convert from a bitgo coin name to a Network enum value.
    pub fn from_coin_name(name: &str) -> Option<Network> {
        match name {
            "bch" => Some(Network::Mainnet),
            "tbch" => Some(Network::Testnet),
            _ => None,
        }
    }

    /// Convert a network name from @bitgo/utxo-lib to a Network enum value.
    pub fn from_utxolib_name(name: &str) -> Option<Network> {
        match name {
            "bitcoincash" => Some(Network::Mainnet),
            "bitcoincashTestnet" => Some(Network::Testnet),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

/// A P2PKH or P2SH address independent of its textual encoding.
///
/// `digest` is only set for addresses read from a legacy string. It is written back
/// verbatim by [`Address::to_legacy_string`] instead of being recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    version: AddressVersion,
    payload: [u8; HASH_LENGTH],
    prefix: String,
    digest: Option<[u8; DIGEST_LENGTH]>,
}

fn legacy_digest(data: &[u8]) -> [u8; DIGEST_LENGTH] {
    let hash = sha256d::Hash::hash(data).to_byte_array();
    [hash[0], hash[1], hash[2], hash[3]]
}

fn hash_from_slice(hash: &[u8]) -> Result<[u8; HASH_LENGTH]> {
    hash.try_into()
        .map_err(|_| AddressError::new(BAD_PAYLOAD_LENGTH))
}

impl Address {
    /// Build an address, reconciling `version` with `prefix`.
    ///
    /// A missing prefix means [`DEFAULT_PREFIX`]. The testnet prefix turns mainnet kinds
    /// into their testnet counterparts, and testnet kinds always get the testnet prefix.
    pub fn new(
        version: AddressVersion,
        payload: [u8; HASH_LENGTH],
        prefix: Option<&str>,
        digest: Option<[u8; DIGEST_LENGTH]>,
    ) -> Address {
        let mut prefix = prefix.unwrap_or(DEFAULT_PREFIX);
        let version = match Network::from_prefix(prefix) {
            Network::Testnet => version.for_network(Network::Testnet),
            Network::Mainnet => version,
        };
        if version.is_testnet() {
            prefix = Network::Testnet.prefix();
        }

        Address {
            version,
            payload,
            prefix: prefix.to_string(),
            digest,
        }
    }

    /// Address for a hash that did not come from a legacy string.
    pub fn from_hash(version: AddressVersion, hash: [u8; HASH_LENGTH]) -> Address {
        Address::new(version, hash, None, None)
    }

    /// Parse either encoding. Strings without a colon are read as legacy addresses.
    pub fn parse(address: &str) -> Result<Address> {
        if address.contains(':') {
            Address::from_cash_str(address)
        } else {
            Address::from_legacy_str(address)
        }
    }

    pub fn from_legacy_str(address: &str) -> Result<Address> {
        let decoded = base58::decode(address)?;
        if decoded.len() <= DIGEST_LENGTH {
            return Err(AddressError::new(LEGACY_DECODE_FAILED));
        }

        let (body, digest) = decoded.split_at(decoded.len() - DIGEST_LENGTH);
        let version = AddressVersion::from_code(AddressFormat::Legacy, body[0])?;

        let digest: [u8; DIGEST_LENGTH] = digest
            .try_into()
            .map_err(|_| AddressError::new(LEGACY_DECODE_FAILED))?;
        if digest != legacy_digest(body) {
            return Err(AddressError::new(LEGACY_DECODE_FAILED));
        }

        let payload = hash_from_slice(&body[1..])?;
        Ok(Address::new(version, payload, None, Some(digest)))
    }

    /// Parse a cashaddr string. The prefix may be omitted, in which case
    /// [`DEFAULT_PREFIX`] is assumed.
    pub fn from_cash_str(address: &str) -> Result<Address> {
        let has_lower = address.bytes().any(|b| b.is_ascii_lowercase());
        let has_upper = address.bytes().any(|b| b.is_ascii_uppercase());
        if has_lower && has_upper {
            return Err(AddressError::new(MIXED_CASE));
        }

        let address = address.to_ascii_lowercase();
        let (prefix, body) = address
            .split_once(':')
            .unwrap_or((DEFAULT_PREFIX, address.as_str()));

        let data = b32decode(body)?;
        if data.len() < CHECKSUM_LENGTH || !verify_checksum(prefix, &data) {
            return Err(AddressError::new(BAD_CHECKSUM));
        }

        let bytes = convert_bits(&data[..data.len() - CHECKSUM_LENGTH], 5, 8, false)?;
        let (&code, hash) = bytes
            .split_first()
            .ok_or_else(|| AddressError::new(UNKNOWN_VERSION))?;
        let version = AddressVersion::from_code(AddressFormat::Cashaddr, code)?;

        let payload = hash_from_slice(hash)?;
        Ok(Address::new(version, payload, Some(prefix), None))
    }

    pub fn to_legacy_string(&self) -> Result<String> {
        let code = self.version.code(AddressFormat::Legacy)?;

        let mut data = Vec::with_capacity(1 + HASH_LENGTH + DIGEST_LENGTH);
        data.push(code);
        data.extend_from_slice(&self.payload);
        let digest = self.digest.unwrap_or_else(|| legacy_digest(&data));
        data.extend_from_slice(&digest);

        Ok(base58::encode(&data))
    }

    pub fn to_cash_string(&self) -> Result<String> {
        let code = self.version.code(AddressFormat::Cashaddr)?;

        let mut data = Vec::with_capacity(1 + HASH_LENGTH);
        data.push(code);
        data.extend_from_slice(&self.payload);

        let mut symbols = convert_bits(&data, 8, 5, true)?;
        let checksum = calculate_checksum(&self.prefix, &symbols);
        symbols.extend_from_slice(&checksum);

        Ok(format!("{}:{}", self.prefix, b32encode(&symbols)?))
    }

    pub fn to_string_with_format(&self, format: AddressFormat) -> Result<String> {
        match format {
            AddressFormat::Legacy => self.to_legacy_string(),
            AddressFormat::Cashaddr => self.to_cash_string(),
        }
    }

    pub fn version(&self) -> AddressVersion {
        self.version
    }

    pub fn payload(&self) -> &[u8; HASH_LENGTH] {
        &self.payload
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn digest(&self) -> Option<&[u8; DIGEST_LENGTH]> {
        self.digest.as_ref()
    }

    pub fn network(&self) -> Network {
        if self.version.is_testnet() {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Address::parse(s)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = self.to_cash_string().map_err(|_| fmt::Error)?;
        write!(f, "{}", address)
    }
}
