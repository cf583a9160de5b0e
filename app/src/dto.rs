//! Response types printed by the CLI

use serde::Serialize;
use xbridge_core::{BalanceSnapshot, ChainId, FixedPointNumber, WeightLimit};

/// Balance of one token for one address
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResponse {
    pub chain: String,
    pub token: String,
    pub address: String,
    #[serde(flatten)]
    pub balance: BalanceSnapshot,
}

/// Maximum transferable amount
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxInputResponse {
    pub chain: String,
    pub to: ChainId,
    pub token: String,
    /// Raw capacity, negative when fees and deposits exceed the balance
    pub max_input: FixedPointNumber,
    /// `max_input` clamped at zero
    pub transferable: FixedPointNumber,
}

impl MaxInputResponse {
    pub fn new(chain: &str, to: ChainId, token: &str, max_input: FixedPointNumber) -> Self {
        Self {
            chain: chain.to_string(),
            to,
            token: token.to_string(),
            transferable: max_input.clamp_zero(),
            max_input,
        }
    }
}

/// Outbound route with its destination fee at the fee token's precision
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub from: ChainId,
    pub to: ChainId,
    pub token: String,
    pub fee_token: String,
    pub fee: FixedPointNumber,
    pub weight_limit: WeightLimit,
}

/// Error printed on failure
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    /// Use the adapter error code when the failure came from an adapter
    pub fn from_error(err: &anyhow::Error) -> Self {
        let code = err
            .downcast_ref::<bridge_adapter::AdapterError>()
            .map(|e| e.error_code())
            .unwrap_or("cli_error");
        Self {
            code: code.to_string(),
            message: format!("{:#}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_adapter::AdapterError;

    #[test]
    fn test_transferable_is_clamped() {
        let response = MaxInputResponse::new(
            "turing",
            ChainId::new("moonriver"),
            "TUR",
            FixedPointNumber::from_signed_inner(-5, 10),
        );
        assert!(response.max_input.is_negative());
        assert!(response.transferable.is_zero());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["transferable"], "0");
        assert_eq!(json["maxInput"], "-0.0000000005");
    }

    #[test]
    fn test_error_codes() {
        let err = anyhow::Error::new(AdapterError::TokenNotFound {
            token: "XYZ".into(),
        });
        assert_eq!(ErrorResponse::from_error(&err).code, "token_not_found");

        let err = anyhow::anyhow!("boom");
        assert_eq!(ErrorResponse::from_error(&err).code, "cli_error");
    }
}
