//! Error types for adapters

use chain_source::SourceError;
use thiserror::Error;
use xbridge_core::RegistryError;
use xcm_tx::TxError;

/// Errors surfaced by balance and cross-chain adapters
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Chain API not available for {chain}")]
    ApiNotFound { chain: String },

    #[error("Token not found: {token}")]
    TokenNotFound { token: String },

    #[error("Invalid address: {address}")]
    InvalidAddress { address: String },

    #[error("No route from {from} to {to} for {token}")]
    RouteNotFound {
        from: String,
        to: String,
        token: String,
    },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("Transaction error: {0}")]
    Tx(#[from] TxError),
}

impl AdapterError {
    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ApiNotFound { .. } => "api_not_found",
            Self::TokenNotFound { .. } => "token_not_found",
            Self::InvalidAddress { .. } => "invalid_address",
            Self::RouteNotFound { .. } => "route_not_found",
            Self::InvalidAmount { .. } => "invalid_amount",
            Self::Registry(_) => "registry_error",
            Self::Source(_) => "source_error",
            Self::Tx(_) => "tx_error",
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, AdapterError>;
