use anyhow::{Context, Result};
use xbridge_core::{ChainId, FixedPointNumber, TransferParams};
use xcm_tx::UnsignedTransfer;

use crate::state::AppState;

/// Transfer request as entered on the command line
#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub token: String,
    /// Decimal amount in whole tokens
    pub amount: String,
    pub address: String,
    pub to: String,
    pub to_address: String,
    pub signer: String,
}

/// Build an unsigned transfer on `chain`
pub fn build_transfer(
    state: &AppState,
    chain: &str,
    request: &TransferRequest,
) -> Result<UnsignedTransfer> {
    let adapter = state.adapter(chain)?;
    let decimals = adapter.get_token(&request.token)?.decimals;
    let amount = FixedPointNumber::parse(&request.amount, decimals)
        .with_context(|| format!("Invalid {} amount", request.token))?;

    let params = TransferParams {
        token: request.token.clone(),
        amount,
        address: request.address.clone(),
        to_address: request.to_address.clone(),
        to: ChainId::new(request.to.as_str()),
        signer: request.signer.clone(),
    };

    Ok(adapter.create_transfer_tx(&params)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_adapter::AdapterError;
    use chain_source::InMemorySource;
    use xbridge_core::AppConfig;

    const ALICE: &str = "6AwtFW6sYcQ8RcuAJeXdDKuFtUVXj4xW57ghjYQ5xyciT1yd";
    const ETH: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f2bD08";

    fn request(to: &str, amount: &str) -> TransferRequest {
        TransferRequest {
            token: "TUR".into(),
            amount: amount.into(),
            address: ALICE.into(),
            to: to.into(),
            to_address: ETH.into(),
            signer: ALICE.into(),
        }
    }

    #[tokio::test]
    async fn test_build_transfer() {
        let state = AppState::with_source(AppConfig::default(), InMemorySource::new())
            .await
            .unwrap();

        let tx = build_transfer(&state, "turing", &request("moonriver", "1.5")).unwrap();
        assert_eq!(tx.args.amount, 15_000_000_000);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["pallet"], "xTokens");
        assert_eq!(json["args"]["amount"], "15000000000");
    }

    #[tokio::test]
    async fn test_build_transfer_errors() {
        let state = AppState::with_source(AppConfig::default(), InMemorySource::new())
            .await
            .unwrap();

        let err = build_transfer(&state, "turing", &request("kusama", "1")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdapterError>(),
            Some(AdapterError::RouteNotFound { .. })
        ));

        assert!(build_transfer(&state, "turing", &request("moonriver", "0.00000000001")).is_err());

        let err = build_transfer(&state, "moonriver", &TransferRequest {
            token: "MOVR".into(),
            ..request("turing", "1")
        })
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AdapterError>(),
            Some(AdapterError::ApiNotFound { .. })
        ));
    }
}
