//! Core type definitions for xbridge

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::amount::FixedPointNumber;

/// Chain identifier, unique across the catalogue (e.g. "turing", "moonriver")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub String);

impl ChainId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ChainId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Address family a chain expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// SS58 (base-58) account addresses
    Substrate,
    /// 20-byte hex account addresses
    Ethereum,
}

impl ChainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Substrate => "substrate",
            Self::Ethereum => "ethereum",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Chain metadata. Immutable once loaded into the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    pub id: ChainId,
    pub display: String,
    #[serde(rename = "type")]
    pub chain_type: ChainType,
    /// `None` for relay chains
    pub para_chain_id: Option<u32>,
    pub ss58_prefix: u16,
}

/// On-chain identifier of a token, resolved once from the raw table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetId {
    /// The chain's native token (raw id "0")
    Native,
    /// ORML `tokens` currency index
    Currency(u32),
    /// `assets` pallet asset id
    Asset(u128),
}

impl AssetId {
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Currency(id) => write!(f, "currency:{}", id),
            Self::Asset(id) => write!(f, "asset:{}", id),
        }
    }
}

/// How a chain family encodes non-native raw identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetIdKind {
    Currency,
    Asset,
}

impl AssetIdKind {
    /// Resolve a raw table identifier. "0" always marks the native token.
    pub fn resolve(&self, raw: &str) -> Option<AssetId> {
        if raw == "0" {
            return Some(AssetId::Native);
        }
        match self {
            Self::Currency => raw.parse().ok().map(AssetId::Currency),
            Self::Asset => raw.parse().ok().map(AssetId::Asset),
        }
    }
}

/// Token metadata on a specific chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
    /// Existential deposit in smallest units
    pub ed: u128,
    pub asset_id: AssetId,
}

impl Token {
    pub fn is_native(&self) -> bool {
        self.asset_id.is_native()
    }

    /// Wrap a raw smallest-unit amount at this token's precision
    pub fn amount(&self, raw: u128) -> FixedPointNumber {
        FixedPointNumber::from_inner(raw, self.decimals)
    }

    /// Existential deposit as a fixed-point amount
    pub fn ed_amount(&self) -> FixedPointNumber {
        self.amount(self.ed)
    }
}

/// Destination weight limit for an XCM transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightLimit {
    Unlimited,
    Limited(u64),
}

impl fmt::Display for WeightLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => write!(f, "Unlimited"),
            Self::Limited(weight) => write!(f, "{}", weight),
        }
    }
}

/// Fixed fee charged on the destination for a route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFee {
    pub token: String,
    /// Amount in the fee token's smallest unit
    pub amount: u128,
}

/// A validated transfer route from one chain to another for one token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub from: ChainId,
    pub to: ChainId,
    pub token: String,
    pub fee: RouteFee,
    pub weight_limit: WeightLimit,
}

/// Normalized balance observation. Each update produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    /// Spendable, unencumbered
    pub free: FixedPointNumber,
    /// Held by reservations, not transferable
    pub reserved: FixedPointNumber,
    /// Frozen by locks (vesting, staking); overlaps with free
    pub locked: FixedPointNumber,
    /// Transferable quantity under the chain's ledger policy
    pub available: FixedPointNumber,
}

/// Parameters for a cross-chain transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferParams {
    pub token: String,
    pub amount: FixedPointNumber,
    /// Sender address on the source chain
    pub address: String,
    /// Recipient address on the destination chain
    pub to_address: String,
    pub to: ChainId,
    /// Signer reference handed to the transaction builder
    pub signer: String,
}
