//! Address validation for Substrate (SS58) and Ethereum-style accounts
//!
//! Performs format and checksum checks only. Decoding yields the raw account
//! bytes that XCM destinations are built from.

use blake2::{Blake2b512, Digest};

use crate::errors::AddressError;
use crate::types::ChainType;

const SS58_CHECKSUM_PREFIX: &[u8] = b"SS58PRE";
const SS58_CHECKSUM_LEN: usize = 2;
const ACCOUNT_ID_LEN: usize = 32;

/// Raw account bytes for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKey {
    /// 32-byte Substrate account id
    Id32([u8; 32]),
    /// 20-byte Ethereum-style account key
    Key20([u8; 20]),
}

impl AccountKey {
    /// 0x-prefixed hex of the key bytes
    pub fn to_hex(&self) -> String {
        match self {
            Self::Id32(bytes) => format!("0x{}", hex::encode(bytes)),
            Self::Key20(bytes) => format!("0x{}", hex::encode(bytes)),
        }
    }
}

/// Decoded SS58 address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ss58Address {
    pub prefix: u16,
    pub account: [u8; 32],
}

/// Decode an SS58 address with a one- or two-byte network prefix.
pub fn decode_ss58(address: &str) -> Result<Ss58Address, AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }

    let data = bs58::decode(address)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

    if data.len() < 2 {
        return Err(AddressError::InvalidLength { len: data.len() });
    }

    let (prefix_len, prefix) = match data[0] {
        0..=63 => (1, u16::from(data[0])),
        64..=127 => {
            let lower = (u16::from(data[0] & 0b0011_1111) << 2) | u16::from(data[1] >> 6);
            let upper = u16::from(data[1] & 0b0011_1111) << 8;
            (2, lower | upper)
        }
        byte => return Err(AddressError::InvalidPrefix { byte }),
    };

    if data.len() != prefix_len + ACCOUNT_ID_LEN + SS58_CHECKSUM_LEN {
        return Err(AddressError::InvalidLength { len: data.len() });
    }

    let body_len = data.len() - SS58_CHECKSUM_LEN;
    let hash = ss58_hash(&data[..body_len]);
    if hash[..SS58_CHECKSUM_LEN] != data[body_len..] {
        return Err(AddressError::InvalidChecksum);
    }

    let mut account = [0u8; 32];
    account.copy_from_slice(&data[prefix_len..body_len]);

    Ok(Ss58Address { prefix, account })
}

fn ss58_hash(data: &[u8]) -> Vec<u8> {
    let mut hasher = Blake2b512::new();
    hasher.update(SS58_CHECKSUM_PREFIX);
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Decode a `0x`-prefixed 20-byte Ethereum-style address
pub fn decode_ethereum(address: &str) -> Result<[u8; 20], AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }

    let hex_part = address.strip_prefix("0x").ok_or(AddressError::InvalidHex)?;
    if hex_part.len() != 40 {
        return Err(AddressError::InvalidHex);
    }

    let bytes = hex::decode(hex_part).map_err(|_| AddressError::InvalidHex)?;
    let mut key = [0u8; 20];
    key.copy_from_slice(&bytes);
    Ok(key)
}

pub fn is_substrate_address(address: &str) -> bool {
    decode_ss58(address).is_ok()
}

pub fn is_ethereum_address(address: &str) -> bool {
    decode_ethereum(address).is_ok()
}

/// Decode an address using the check selected by the chain's declared type
pub fn account_key(address: &str, chain_type: ChainType) -> Result<AccountKey, AddressError> {
    match chain_type {
        ChainType::Substrate => decode_ss58(address).map(|a| AccountKey::Id32(a.account)),
        ChainType::Ethereum => decode_ethereum(address).map(AccountKey::Key20),
    }
}
