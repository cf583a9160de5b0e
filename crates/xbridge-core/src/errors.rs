//! Error types for xbridge-core

use thiserror::Error;

/// Static table validation errors, raised while loading registries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate chain id: {chain}")]
    DuplicateChain { chain: String },

    #[error("Unknown chain: {chain}")]
    UnknownChain { chain: String },

    #[error("Duplicate token {token} on {chain}")]
    DuplicateToken { chain: String, token: String },

    #[error("Chain {chain} must have exactly one native token, found {count}")]
    NativeToken { chain: String, count: usize },

    #[error("Token {token} on {chain} has unparsable raw id '{raw}'")]
    InvalidRawId {
        chain: String,
        token: String,
        raw: String,
    },

    #[error("Token {token} has unsupported precision {decimals}")]
    UnsupportedPrecision { token: String, decimals: u32 },

    #[error("Route {from} -> {to} references token {token} missing from {from}")]
    RouteTokenMissing {
        from: String,
        to: String,
        token: String,
    },

    #[error("Route for {token} on {chain} points back to itself")]
    RouteToSelf { chain: String, token: String },

    #[error("Duplicate route {from} -> {to} for {token}")]
    DuplicateRoute {
        from: String,
        to: String,
        token: String,
    },
}

/// Address format errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address cannot be empty")]
    Empty,

    #[error("Invalid base-58 encoding: {0}")]
    InvalidBase58(String),

    #[error("Invalid address length: {len} bytes")]
    InvalidLength { len: usize },

    #[error("Unsupported SS58 prefix byte: {byte:#04x}")]
    InvalidPrefix { byte: u8 },

    #[error("SS58 checksum mismatch")]
    InvalidChecksum,

    #[error("Ethereum address must be 0x followed by 40 hex characters")]
    InvalidHex,
}

/// Fixed-point parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Invalid amount: {0}")]
    Invalid(String),

    #[error("Amount {value} has more than {precision} decimals")]
    TooManyDecimals { value: String, precision: u32 },

    #[error("Amount overflows the supported range")]
    Overflow,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_messages() {
        let err = RegistryError::RouteTokenMissing {
            from: "moonriver".into(),
            to: "turing".into(),
            token: "TUR".into(),
        };
        assert_eq!(
            err.to_string(),
            "Route moonriver -> turing references token TUR missing from moonriver"
        );

        let err = RegistryError::NativeToken {
            chain: "turing".into(),
            count: 0,
        };
        assert!(err.to_string().contains("exactly one native token"));
    }
}
