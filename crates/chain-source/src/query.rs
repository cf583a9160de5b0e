//! Storage queries and decoded values

use std::fmt;

use serde::{Deserialize, Serialize};

/// A storage entry addressed by pallet path and its key parameters.
///
/// Parameters are kept in their textual form (addresses, decimal ids) so the
/// query doubles as a replay-file key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorageQuery {
    pub path: String,
    #[serde(default)]
    pub params: Vec<String>,
}

impl StorageQuery {
    pub fn new(path: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    /// `system.account(address)`
    pub fn system_account(address: &str) -> Self {
        Self::new("system.account", vec![address.to_string()])
    }

    /// `tokens.accounts(address, currencyId)`
    pub fn tokens_accounts(address: &str, currency_id: u32) -> Self {
        Self::new(
            "tokens.accounts",
            vec![address.to_string(), currency_id.to_string()],
        )
    }

    /// `assets.account(assetId, address)`
    pub fn assets_account(asset_id: u128, address: &str) -> Self {
        Self::new(
            "assets.account",
            vec![asset_id.to_string(), address.to_string()],
        )
    }
}

impl fmt::Display for StorageQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.path, self.params.join(", "))
    }
}

/// Decoded account-like storage value.
///
/// Every field is optional: ledgers expose different subsets, and a record
/// with no fields set is an account that does not exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved: Option<u128>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<u128>,
    /// Single-balance ledgers (`assets` pallet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<u128>,
}

impl StorageValue {
    /// Account record with free/reserved/frozen fields
    pub fn account(free: u128, reserved: u128, frozen: u128) -> Self {
        Self {
            free: Some(free),
            reserved: Some(reserved),
            frozen: Some(frozen),
            balance: None,
        }
    }

    /// Single-balance record
    pub fn balance(balance: u128) -> Self {
        Self {
            balance: Some(balance),
            ..Self::default()
        }
    }

    pub fn is_absent(&self) -> bool {
        *self == Self::default()
    }
}
