//! Transaction builder contract and JSON reference builder

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use xbridge_core::ChainId;

use crate::error::TxError;
use crate::xtokens::TransferCall;
use crate::Result;

/// Unsigned extrinsic handed back to the caller for signing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransfer {
    pub chain: ChainId,
    pub signer: String,
    pub pallet: String,
    pub method: String,
    pub args: TransferCall,
}

impl UnsignedTransfer {
    /// Serialize to JSON string
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Turns a transfer call into an unsigned extrinsic and prices it
#[async_trait]
pub trait TransactionBuilder: Send + Sync {
    fn build(&self, chain: &ChainId, signer: &str, call: TransferCall) -> Result<UnsignedTransfer>;

    /// Partial fee in the source chain's smallest native unit
    async fn estimate_fee(&self, tx: &UnsignedTransfer) -> Result<u128>;
}

/// Builder that emits JSON call payloads and reports a fixed fee estimate
#[derive(Debug, Default)]
pub struct JsonTxBuilder {
    fee_estimate: Option<u128>,
    builds: AtomicUsize,
    estimates: AtomicUsize,
}

impl JsonTxBuilder {
    pub fn new(fee_estimate: u128) -> Self {
        Self {
            fee_estimate: Some(fee_estimate),
            ..Self::default()
        }
    }

    /// A builder whose fee estimates always fail
    pub fn without_fee_estimate() -> Self {
        Self::default()
    }

    /// Number of `build` calls so far
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::SeqCst)
    }

    /// Number of `estimate_fee` calls so far
    pub fn estimate_count(&self) -> usize {
        self.estimates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransactionBuilder for JsonTxBuilder {
    fn build(&self, chain: &ChainId, signer: &str, call: TransferCall) -> Result<UnsignedTransfer> {
        self.builds.fetch_add(1, Ordering::SeqCst);

        if signer.is_empty() {
            return Err(TxError::BuildFailed {
                message: "signer is required".to_string(),
            });
        }

        debug!(%chain, amount = %call.amount, "Building xTokens transfer");

        Ok(UnsignedTransfer {
            chain: chain.clone(),
            signer: signer.to_string(),
            pallet: TransferCall::PALLET.to_string(),
            method: TransferCall::METHOD.to_string(),
            args: call,
        })
    }

    async fn estimate_fee(&self, tx: &UnsignedTransfer) -> Result<u128> {
        self.estimates.fetch_add(1, Ordering::SeqCst);

        self.fee_estimate.ok_or_else(|| TxError::FeeEstimation {
            message: format!("no fee estimate configured for {}", tx.chain),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{Junction, Junctions, MultiLocation, VersionedLocation};
    use xbridge_core::WeightLimit;

    fn call(amount: u128) -> TransferCall {
        TransferCall::new(
            0,
            amount,
            VersionedLocation::V3(MultiLocation {
                parents: 1,
                interior: Junctions::X1(Junction::Parachain(2023)),
            }),
            WeightLimit::Limited(5_000_000_000),
        )
    }

    #[tokio::test]
    async fn test_build_and_estimate() {
        let builder = JsonTxBuilder::new(480_597_195);
        let tx = builder
            .build(&ChainId::new("turing"), "alice", call(1_000))
            .unwrap();

        assert_eq!(tx.pallet, "xTokens");
        assert_eq!(tx.method, "transfer");
        assert_eq!(builder.estimate_fee(&tx).await.unwrap(), 480_597_195);
        assert_eq!(builder.build_count(), 1);
        assert_eq!(builder.estimate_count(), 1);

        let json = tx.to_json().unwrap();
        assert!(json.contains("\"destWeightLimit\":{\"Limited\":5000000000}"));
    }

    #[tokio::test]
    async fn test_fee_estimation_failure() {
        let builder = JsonTxBuilder::without_fee_estimate();
        let tx = builder
            .build(&ChainId::new("turing"), "alice", call(0))
            .unwrap();

        assert!(matches!(
            builder.estimate_fee(&tx).await,
            Err(TxError::FeeEstimation { .. })
        ));
    }

    #[test]
    fn test_empty_signer_rejected() {
        let builder = JsonTxBuilder::new(1);
        let err = builder
            .build(&ChainId::new("turing"), "", call(1))
            .unwrap_err();
        assert!(matches!(err, TxError::BuildFailed { .. }));
    }
}
