//! XCM V3 locations
//!
//! Serialized in the externally tagged JSON shape used by polkadot.js, e.g.
//! `{"V3": {"parents": 1, "interior": {"X2": [{"Parachain": 2023}, ...]}}}`.

use serde::{Deserialize, Serialize};
use xbridge_core::address::AccountKey;
use xbridge_core::Chain;

use crate::error::TxError;

/// A single step in an interior location path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Junction {
    Parachain(u32),
    AccountId32 {
        network: Option<String>,
        /// 0x-prefixed 32-byte account id
        id: String,
    },
    AccountKey20 {
        network: Option<String>,
        /// 0x-prefixed 20-byte account key
        key: String,
    },
}

impl Junction {
    /// Account junction for raw account bytes
    pub fn account(key: &AccountKey) -> Self {
        match key {
            AccountKey::Id32(_) => Self::AccountId32 {
                network: None,
                id: key.to_hex(),
            },
            AccountKey::Key20(_) => Self::AccountKey20 {
                network: None,
                key: key.to_hex(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Junctions {
    Here,
    X1(Junction),
    X2(Junction, Junction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiLocation {
    pub parents: u8,
    pub interior: Junctions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VersionedLocation {
    V3(MultiLocation),
}

/// Location of an account on `dest`, as seen from a sibling parachain.
///
/// Relay chains only accept 32-byte account ids.
pub fn dest_location(dest: &Chain, account: &AccountKey) -> Result<VersionedLocation, TxError> {
    let interior = match (dest.para_chain_id, account) {
        (Some(para_id), _) => Junctions::X2(Junction::Parachain(para_id), Junction::account(account)),
        (None, AccountKey::Id32(_)) => Junctions::X1(Junction::account(account)),
        (None, AccountKey::Key20(_)) => {
            return Err(TxError::InvalidDestination {
                reason: format!("relay chain {} requires a 32-byte account", dest.id),
            })
        }
    };

    Ok(VersionedLocation::V3(MultiLocation {
        parents: 1,
        interior,
    }))
}
