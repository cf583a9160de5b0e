//! Turing network adapters

use std::sync::Arc;

use async_trait::async_trait;
use bridge_adapter::{AdapterCore, CrossChainAdapter, Result};
use xcm_tx::TransactionBuilder;

use crate::balance::OakFamily;
use crate::constants::{TURING, TURING_LOCAL, TURING_STAGING};

/// Turing on Kusama
pub struct TuringAdapter {
    core: AdapterCore,
}

impl TuringAdapter {
    pub const CHAIN: &'static str = "turing";

    pub fn new(builder: Arc<dyn TransactionBuilder>) -> Result<Self> {
        let core = AdapterCore::new(Self::CHAIN, Arc::new(OakFamily), TURING, builder)?;
        Ok(Self { core })
    }
}

#[async_trait]
impl CrossChainAdapter for TuringAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AdapterCore {
        &mut self.core
    }
}

/// Turing staging parachain on Rococo
pub struct TuringStagingAdapter {
    core: AdapterCore,
}

impl TuringStagingAdapter {
    pub const CHAIN: &'static str = "turing-staging";

    pub fn new(builder: Arc<dyn TransactionBuilder>) -> Result<Self> {
        let core = AdapterCore::new(Self::CHAIN, Arc::new(OakFamily), TURING_STAGING, builder)?;
        Ok(Self { core })
    }
}

#[async_trait]
impl CrossChainAdapter for TuringStagingAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AdapterCore {
        &mut self.core
    }
}

/// Local Turing dev node
pub struct TuringLocalAdapter {
    core: AdapterCore,
}

impl TuringLocalAdapter {
    pub const CHAIN: &'static str = "turing-local";

    pub fn new(builder: Arc<dyn TransactionBuilder>) -> Result<Self> {
        let core = AdapterCore::new(Self::CHAIN, Arc::new(OakFamily), TURING_LOCAL, builder)?;
        Ok(Self { core })
    }
}

#[async_trait]
impl CrossChainAdapter for TuringLocalAdapter {
    fn core(&self) -> &AdapterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AdapterCore {
        &mut self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_adapter::AdapterError;
    use chain_source::{InMemorySource, StorageQuery, StorageValue};
    use futures::StreamExt;
    use xbridge_core::{
        AssetId, ChainId, FixedPointNumber, TransferParams, WeightLimit,
    };
    use xcm_tx::{Junction, Junctions, JsonTxBuilder, MultiLocation, TxError, VersionedLocation};

    const ALICE: &str = "6AwtFW6sYcQ8RcuAJeXdDKuFtUVXj4xW57ghjYQ5xyciT1yd";
    const ETH: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f2bD08";

    fn moonriver() -> ChainId {
        ChainId::new("moonriver")
    }

    async fn turing(builder: Arc<JsonTxBuilder>, source: &InMemorySource) -> TuringAdapter {
        let mut adapter = TuringAdapter::new(builder).unwrap();
        adapter.init(Arc::new(source.clone())).await.unwrap();
        adapter
    }

    #[test]
    fn test_all_tables_load() {
        let builder: Arc<JsonTxBuilder> = Arc::new(JsonTxBuilder::new(1));
        let turing = TuringAdapter::new(builder.clone()).unwrap();
        let staging = TuringStagingAdapter::new(builder.clone()).unwrap();
        let local = TuringLocalAdapter::new(builder).unwrap();

        assert_eq!(turing.native_token().symbol, "TUR");
        assert_eq!(turing.list_routes().len(), 4);
        assert_eq!(staging.get_token("RSTR").unwrap().decimals, 18);
        assert!(staging.get_token("MOVR").is_err());
        assert_eq!(
            staging
                .dest_weight("TUR", &ChainId::new("rocstar"))
                .unwrap(),
            WeightLimit::Limited(5_000_000_000)
        );
        assert_eq!(local.get_token("SBY").unwrap().asset_id, AssetId::Currency(4));
        assert_eq!(local.chain().para_chain_id, Some(2114));
    }

    #[test]
    fn test_cross_chain_fee_uses_fee_token() {
        let adapter = TuringAdapter::new(Arc::new(JsonTxBuilder::new(1))).unwrap();
        assert_eq!(
            adapter.cross_chain_fee("TUR", &moonriver()).unwrap().inner(),
            480_597_195
        );
        let movr_fee = adapter.cross_chain_fee("MOVR", &moonriver()).unwrap();
        assert_eq!(movr_fee.precision(), 18);
    }

    #[tokio::test]
    async fn test_native_balance_normalization() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::system_account(ALICE),
            StorageValue::account(1000, 50, 10),
        );
        let adapter = turing(Arc::new(JsonTxBuilder::new(1)), &source).await;

        let mut balances = adapter.subscribe_token_balance("TUR", ALICE).unwrap();
        let snapshot = balances.next().await.unwrap();

        assert_eq!(snapshot.free.inner(), 990);
        assert_eq!(snapshot.reserved.inner(), 50);
        assert_eq!(snapshot.locked.inner(), 10);
        assert_eq!(snapshot.available.inner(), 1040);
        assert_eq!(snapshot.available.precision(), 10);
    }

    #[tokio::test]
    async fn test_asset_balance_uses_token_decimals() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::tokens_accounts(ALICE, 1),
            StorageValue::account(1_500_000_000_000, 7, 0),
        );
        let adapter = turing(Arc::new(JsonTxBuilder::new(1)), &source).await;

        let mut balances = adapter.subscribe_token_balance("KSM", ALICE).unwrap();
        let snapshot = balances.next().await.unwrap();

        assert_eq!(snapshot.free.precision(), 12);
        assert_eq!(snapshot.free.to_string(), "1.5");
        assert_eq!(snapshot.available, snapshot.free);
    }

    #[tokio::test]
    async fn test_foreign_address_yields_empty_stream() {
        let source = InMemorySource::new();
        let adapter = turing(Arc::new(JsonTxBuilder::new(1)), &source).await;

        let mut balances = adapter.subscribe_token_balance("TUR", ETH).unwrap();
        assert!(balances.next().await.is_none());

        let mut max_input = adapter
            .subscribe_max_input("TUR", ETH, &moonriver())
            .unwrap();
        assert!(max_input.next().await.is_none());
        assert_eq!(source.total_subscribers(), 0);

        let err = adapter
            .subscribe_token_balance("TUR", "not-an-address")
            .err()
            .unwrap();
        assert!(matches!(err, AdapterError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_max_input_to_moonriver() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::system_account(ALICE),
            StorageValue::account(2_000_000_000, 0, 0),
        );
        let builder = Arc::new(JsonTxBuilder::new(480_597_195));
        let adapter = turing(Arc::clone(&builder), &source).await;

        let mut max_input = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();
        let value = max_input.next().await.unwrap().unwrap();

        assert_eq!(value.inner(), 1_323_283_366);
        assert_eq!(value.to_string(), "0.1323283366");
        assert_eq!(builder.estimate_count(), 1);
    }

    #[tokio::test]
    async fn test_max_input_follows_balance_updates() {
        let source = InMemorySource::new();
        let query = StorageQuery::system_account(ALICE);
        source.push(&query, StorageValue::account(2_000_000_000, 0, 0));
        let adapter = turing(Arc::new(JsonTxBuilder::new(480_597_195)), &source).await;

        let mut max_input = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();
        let first = max_input.next().await.unwrap().unwrap();

        source.push(&query, StorageValue::account(3_000_000_000, 0, 0));
        let second = max_input.next().await.unwrap().unwrap();

        assert_eq!(second.minus(&first).inner(), 1_000_000_000);
    }

    #[tokio::test]
    async fn test_negative_max_input_is_emitted() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::system_account(ALICE),
            StorageValue::account(100_000_000, 0, 0),
        );
        let adapter = turing(Arc::new(JsonTxBuilder::new(480_597_195)), &source).await;

        let mut max_input = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();
        let value = max_input.next().await.unwrap().unwrap();
        assert!(value.is_negative());
        assert_eq!(value.clamp_zero().to_string(), "0");
    }

    #[tokio::test]
    async fn test_independent_subscriptions_agree() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::system_account(ALICE),
            StorageValue::account(5_000_000_000, 100, 0),
        );
        let adapter = turing(Arc::new(JsonTxBuilder::new(480_597_195)), &source).await;

        let mut first = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();
        let mut second = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();

        assert_eq!(
            first.next().await.unwrap().unwrap(),
            second.next().await.unwrap().unwrap()
        );
    }

    #[tokio::test]
    async fn test_dropping_stream_releases_subscription() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::system_account(ALICE),
            StorageValue::account(2_000_000_000, 0, 0),
        );
        let adapter = turing(Arc::new(JsonTxBuilder::new(480_597_195)), &source).await;

        let mut max_input = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();
        max_input.next().await.unwrap().unwrap();
        assert_eq!(source.total_subscribers(), 1);

        drop(max_input);
        assert_eq!(source.total_subscribers(), 0);
    }

    #[tokio::test]
    async fn test_fee_failure_surfaces_as_error_item() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::system_account(ALICE),
            StorageValue::account(2_000_000_000, 0, 0),
        );
        let adapter = turing(Arc::new(JsonTxBuilder::without_fee_estimate()), &source).await;

        let mut max_input = adapter
            .subscribe_max_input("TUR", ALICE, &moonriver())
            .unwrap();
        let err = max_input.next().await.unwrap().unwrap_err();
        assert!(matches!(err, AdapterError::Tx(TxError::FeeEstimation { .. })));
    }

    #[tokio::test]
    async fn test_non_native_max_input_skips_fee_probe() {
        let source = InMemorySource::new();
        source.push(
            &StorageQuery::tokens_accounts(ALICE, 1),
            StorageValue::account(1_000_000_000_000, 0, 0),
        );
        let builder = Arc::new(JsonTxBuilder::new(480_597_195));
        let adapter = turing(Arc::clone(&builder), &source).await;

        let mut max_input = adapter
            .subscribe_max_input("KSM", ALICE, &ChainId::new("kusama"))
            .unwrap();
        let value = max_input.next().await.unwrap().unwrap();

        assert_eq!(value.inner(), 999_900_000_000);
        assert_eq!(builder.build_count(), 0);
        assert_eq!(builder.estimate_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_route_fails_before_building() {
        let source = InMemorySource::new();
        let builder = Arc::new(JsonTxBuilder::new(480_597_195));
        let adapter = turing(Arc::clone(&builder), &source).await;

        let err = adapter
            .subscribe_max_input("TUR", ALICE, &ChainId::new("kusama"))
            .err()
            .unwrap();

        assert!(matches!(err, AdapterError::RouteNotFound { .. }));
        assert_eq!(builder.build_count(), 0);
        assert_eq!(source.total_subscribers(), 0);
    }

    #[tokio::test]
    async fn test_unknown_route_transfer_never_reaches_builder() {
        let source = InMemorySource::new();
        let builder = Arc::new(JsonTxBuilder::new(480_597_195));
        let adapter = turing(Arc::clone(&builder), &source).await;

        let params = TransferParams {
            token: "TUR".into(),
            amount: FixedPointNumber::parse("1", 10).unwrap(),
            address: ALICE.into(),
            to_address: ALICE.into(),
            to: ChainId::new("kusama"),
            signer: ALICE.into(),
        };

        let err = adapter.create_transfer_tx(&params).unwrap_err();
        assert_eq!(err.error_code(), "route_not_found");
        assert!(matches!(
            adapter.estimate_tx_fee(&params).await,
            Err(AdapterError::RouteNotFound { .. })
        ));

        assert_eq!(builder.build_count(), 0);
        assert_eq!(builder.estimate_count(), 0);
    }

    #[tokio::test]
    async fn test_transfer_to_ethereum_destination() {
        let source = InMemorySource::new();
        let adapter = turing(Arc::new(JsonTxBuilder::new(1)), &source).await;

        let mut params = TransferParams {
            token: "TUR".into(),
            amount: FixedPointNumber::parse("2", 10).unwrap(),
            address: ALICE.into(),
            to_address: ETH.into(),
            to: moonriver(),
            signer: ALICE.into(),
        };
        let tx = adapter.create_transfer_tx(&params).unwrap();

        assert_eq!(tx.args.amount, 20_000_000_000);
        assert_eq!(tx.args.dest_weight_limit, WeightLimit::Unlimited);
        assert_eq!(
            tx.args.dest,
            VersionedLocation::V3(MultiLocation {
                parents: 1,
                interior: Junctions::X2(
                    Junction::Parachain(2023),
                    Junction::AccountKey20 {
                        network: None,
                        key: ETH.to_lowercase(),
                    },
                ),
            })
        );

        params.to_address = ALICE.into();
        assert!(matches!(
            adapter.create_transfer_tx(&params),
            Err(AdapterError::InvalidAddress { .. })
        ));

        params.to_address = ETH.into();
        params.to = ChainId::new("kusama");
        assert!(matches!(
            adapter.create_transfer_tx(&params),
            Err(AdapterError::RouteNotFound { .. })
        ));
    }
}
