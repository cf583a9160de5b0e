//! Cross-chain adapter contract and the core shared by every chain
//!
//! [`AdapterCore`] owns a chain's validated tables, its balance family and
//! the transaction builder, and moves from uninitialized to ready once a
//! data source signals readiness. Chain adapters wrap a core and get the
//! whole [`CrossChainAdapter`] surface through the provided methods.

use std::sync::Arc;

use async_trait::async_trait;
use chain_source::ChainDataSource;
use futures::future;
use futures::stream::{self, BoxStream, StreamExt};
use serde::Serialize;
use tracing::{debug, info, warn};
use xbridge_core::address::{self, AccountKey};
use xbridge_core::{
    AssetId, AssetIdKind, BalanceSnapshot, Chain, ChainCatalogue, ChainId, ChainType,
    FixedPointNumber, Route, RouteSpec, RouteTable, Token, TokenSpec, TokenTable, TransferParams,
    WeightLimit,
};
use xcm_tx::{dest_location, TransactionBuilder, TransferCall, TxError, UnsignedTransfer};

use crate::balance::{AddressCheck, BalanceAdapter, BalanceFamily, BalanceStream, StorageBalanceAdapter};
use crate::calculator;
use crate::combine::combine_latest;
use crate::error::{AdapterError, Result};

/// Stream of maximum transferable amounts. Fee probe failures arrive as `Err` items.
pub type MaxInputStream = BoxStream<'static, Result<FixedPointNumber>>;

/// Stream of transfer form constraints
pub type InputConfigStream = BoxStream<'static, Result<InputConfig>>;

type FeeResult = std::result::Result<u128, TxError>;
type CapacityStream = BoxStream<'static, (BalanceSnapshot, FeeResult)>;

/// Limits and fees for a transfer form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    pub min_input: FixedPointNumber,
    /// Unclamped, may be negative
    pub max_input: FixedPointNumber,
    /// Address prefix expected on the destination chain
    pub ss58_prefix: u16,
    pub dest_fee: FixedPointNumber,
    /// Source-chain fee estimate in the native token
    pub estimate_fee: FixedPointNumber,
}

/// Static tables a chain adapter is built from
#[derive(Debug, Clone, Copy)]
pub struct ChainTables {
    pub kind: AssetIdKind,
    pub tokens: &'static [TokenSpec],
    pub routes: &'static [RouteSpec],
}

enum AdapterState {
    Uninitialized,
    Ready(StorageBalanceAdapter),
}

/// State and behavior shared by every chain adapter
pub struct AdapterCore {
    chain: Chain,
    catalogue: &'static ChainCatalogue,
    family: Arc<dyn BalanceFamily>,
    tokens: Arc<TokenTable>,
    routes: Arc<RouteTable>,
    builder: Arc<dyn TransactionBuilder>,
    state: AdapterState,
}

impl AdapterCore {
    /// Load and validate a chain's tables against the built-in catalogue
    pub fn new(
        chain: &str,
        family: Arc<dyn BalanceFamily>,
        tables: ChainTables,
        builder: Arc<dyn TransactionBuilder>,
    ) -> Result<Self> {
        let catalogue = ChainCatalogue::builtin()?;
        let chain = catalogue.require(chain)?.clone();
        let tokens = TokenTable::load(&chain.id, tables.kind, tables.tokens)?;
        let routes = RouteTable::load(&chain.id, tables.routes, &tokens, catalogue)?;

        Ok(Self {
            chain,
            catalogue,
            family,
            tokens: Arc::new(tokens),
            routes: Arc::new(routes),
            builder,
            state: AdapterState::Uninitialized,
        })
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, AdapterState::Ready(_))
    }

    /// Error for operations this chain does not provide, or calls before `init`
    pub fn api_not_found(&self) -> AdapterError {
        AdapterError::ApiNotFound {
            chain: self.chain.id.to_string(),
        }
    }

    /// Wait for the data source and bind the balance adapter to it
    pub async fn init(&mut self, source: Arc<dyn ChainDataSource>) -> Result<()> {
        if self.is_ready() {
            debug!(chain = %self.chain.id, "Adapter already initialized");
            return Ok(());
        }

        source.ready().await?;

        self.state = AdapterState::Ready(StorageBalanceAdapter::new(
            self.chain.id.clone(),
            Arc::clone(&self.family),
            Arc::clone(&self.tokens),
            source,
        ));

        info!(
            chain = %self.chain.id,
            tokens = self.tokens.len(),
            routes = self.routes.all().len(),
            "Adapter initialized"
        );
        Ok(())
    }

    fn balance(&self) -> Result<&StorageBalanceAdapter> {
        match &self.state {
            AdapterState::Ready(balance) => Ok(balance),
            AdapterState::Uninitialized => Err(self.api_not_found()),
        }
    }

    // =========================================================================
    // Registry
    // =========================================================================

    pub fn get_token(&self, symbol: &str) -> Result<&Token> {
        self.tokens.get(symbol).ok_or_else(|| AdapterError::TokenNotFound {
            token: symbol.to_string(),
        })
    }

    pub fn native_token(&self) -> &Token {
        self.tokens.native()
    }

    pub fn list_routes(&self) -> &[Route] {
        self.routes.all()
    }

    pub fn find_route(&self, to: &ChainId, token: &str) -> Result<&Route> {
        self.routes
            .find(to, token)
            .ok_or_else(|| AdapterError::RouteNotFound {
                from: self.chain.id.to_string(),
                to: to.to_string(),
                token: token.to_string(),
            })
    }

    /// Fixed destination fee of a route, at the fee token's precision.
    ///
    /// Fee tokens only known on the destination use the route token's precision.
    pub fn cross_chain_fee(&self, token: &str, to: &ChainId) -> Result<FixedPointNumber> {
        let route = self.find_route(to, token)?;
        let decimals = match self.tokens.get(&route.fee.token) {
            Some(fee_token) => fee_token.decimals,
            None => self.get_token(token)?.decimals,
        };
        Ok(FixedPointNumber::from_inner(route.fee.amount, decimals))
    }

    pub fn dest_weight(&self, token: &str, to: &ChainId) -> Result<WeightLimit> {
        Ok(self.find_route(to, token)?.weight_limit)
    }

    // =========================================================================
    // Balances and capacity
    // =========================================================================

    pub fn subscribe_token_balance(&self, token: &str, address: &str) -> Result<BalanceStream> {
        self.balance()?.subscribe_balance(token, address)
    }

    pub fn subscribe_max_input(
        &self,
        token: &str,
        address: &str,
        to: &ChainId,
    ) -> Result<MaxInputStream> {
        let Some((meta, capacity)) = self.capacity(token, address, to)? else {
            return Ok(stream::empty().boxed());
        };

        Ok(capacity
            .map(move |(snapshot, fee)| -> Result<FixedPointNumber> {
                Ok(calculator::max_input(&snapshot.available, fee?, &meta))
            })
            .boxed())
    }

    /// Transfer form constraints, re-emitted with every max-input update.
    ///
    /// `dest_token` adds the destination's existential deposit to `min_input`.
    pub fn subscribe_input_config(
        &self,
        token: &str,
        address: &str,
        to: &ChainId,
        dest_token: Option<&Token>,
    ) -> Result<InputConfigStream> {
        self.balance()?;
        let dest_fee = self.cross_chain_fee(token, to)?;
        let ss58_prefix = self.catalogue.require(to.as_str())?.ss58_prefix;
        let min_input = match dest_token {
            Some(dest_token) => dest_fee.plus(&dest_token.ed_amount()),
            None => dest_fee,
        };
        let native_decimals = self.native_token().decimals;

        let Some((meta, capacity)) = self.capacity(token, address, to)? else {
            return Ok(stream::empty().boxed());
        };

        Ok(capacity
            .map(move |(snapshot, fee)| -> Result<InputConfig> {
                let fee = fee?;
                Ok(InputConfig {
                    min_input,
                    max_input: calculator::max_input(&snapshot.available, fee, &meta),
                    ss58_prefix,
                    dest_fee,
                    estimate_fee: FixedPointNumber::from_inner(fee, native_decimals),
                })
            })
            .boxed())
    }

    /// Balance snapshots paired with the latest fee estimate.
    ///
    /// `None` when the address belongs to another family. All precondition
    /// checks run before the balance subscription is opened.
    fn capacity(
        &self,
        token: &str,
        address: &str,
        to: &ChainId,
    ) -> Result<Option<(Token, CapacityStream)>> {
        let balance = self.balance()?;
        if !balance.admit(address)? {
            return Ok(None);
        }

        let meta = self.get_token(token)?.clone();
        let fees = self.fee_probe(&meta, address, to)?;
        let balances = balance.subscribe_balance(token, address)?;

        Ok(Some((meta, combine_latest(balances, fees).boxed())))
    }

    /// One-shot fee estimate of a zero-amount transfer, zero for non-native tokens
    fn fee_probe(
        &self,
        token: &Token,
        signer: &str,
        to: &ChainId,
    ) -> Result<BoxStream<'static, FeeResult>> {
        if !token.is_native() {
            return Ok(stream::once(future::ready(Ok(0))).boxed());
        }

        let route = self.find_route(to, &token.symbol)?;
        let dest = self.catalogue.require(route.to.as_str())?;
        let recipient = match dest.chain_type {
            ChainType::Substrate => AccountKey::Id32([0u8; 32]),
            ChainType::Ethereum => AccountKey::Key20([0u8; 20]),
        };
        let call = TransferCall::new(
            currency_id(token)?,
            0,
            dest_location(dest, &recipient)?,
            route.weight_limit,
        );

        let builder = Arc::clone(&self.builder);
        let chain = self.chain.id.clone();
        let signer = signer.to_string();

        Ok(stream::once(async move {
            let fee = match builder.build(&chain, &signer, call) {
                Ok(tx) => builder.estimate_fee(&tx).await,
                Err(err) => Err(err),
            };
            if let Err(err) = &fee {
                warn!(%chain, error = %err, "Fee probe failed");
            }
            fee
        })
        .boxed())
    }

    // =========================================================================
    // Transfers
    // =========================================================================

    /// Build an unsigned `xTokens.transfer` for `params`
    pub fn create_xtokens_tx(&self, params: &TransferParams) -> Result<UnsignedTransfer> {
        self.balance()?;
        let call = self.transfer_call(params, false)?;
        Ok(self.builder.build(&self.chain.id, &params.signer, call)?)
    }

    /// Partial fee of the transfer described by `params`. Zero amounts are allowed.
    pub async fn estimate_tx_fee(&self, params: &TransferParams) -> Result<u128> {
        self.balance()?;
        let call = self.transfer_call(params, true)?;
        let tx = self.builder.build(&self.chain.id, &params.signer, call)?;
        Ok(self.builder.estimate_fee(&tx).await?)
    }

    /// Validate params and encode the call. The builder is not touched here.
    fn transfer_call(&self, params: &TransferParams, allow_zero: bool) -> Result<TransferCall> {
        let token = self.get_token(&params.token)?;
        let route = self.find_route(&params.to, &params.token)?;

        if self.family.check_address(&params.address) != AddressCheck::Valid {
            return Err(AdapterError::InvalidAddress {
                address: params.address.clone(),
            });
        }

        let amount = params
            .amount
            .with_precision(token.decimals)
            .and_then(|amount| amount.to_inner_u128())
            .ok_or_else(|| AdapterError::InvalidAmount {
                message: format!("{} is not a valid {} amount", params.amount, token.symbol),
            })?;
        if amount == 0 && !allow_zero {
            return Err(AdapterError::InvalidAmount {
                message: "amount must be positive".to_string(),
            });
        }

        let dest = self.catalogue.require(route.to.as_str())?;
        let recipient = address::account_key(&params.to_address, dest.chain_type).map_err(|_| {
            AdapterError::InvalidAddress {
                address: params.to_address.clone(),
            }
        })?;

        Ok(TransferCall::new(
            currency_id(token)?,
            amount,
            dest_location(dest, &recipient)?,
            route.weight_limit,
        ))
    }
}

fn currency_id(token: &Token) -> Result<u32> {
    match token.asset_id {
        AssetId::Native => Ok(0),
        AssetId::Currency(id) => Ok(id),
        AssetId::Asset(_) => Err(TxError::BuildFailed {
            message: format!("{} has no xTokens currency id", token.symbol),
        }
        .into()),
    }
}

/// Uniform surface over every supported chain
#[async_trait]
pub trait CrossChainAdapter: Send + Sync {
    fn core(&self) -> &AdapterCore;

    fn core_mut(&mut self) -> &mut AdapterCore;

    fn chain(&self) -> &Chain {
        self.core().chain()
    }

    async fn init(&mut self, source: Arc<dyn ChainDataSource>) -> Result<()> {
        self.core_mut().init(source).await
    }

    fn subscribe_token_balance(&self, token: &str, address: &str) -> Result<BalanceStream> {
        self.core().subscribe_token_balance(token, address)
    }

    fn subscribe_max_input(
        &self,
        token: &str,
        address: &str,
        to: &ChainId,
    ) -> Result<MaxInputStream> {
        self.core().subscribe_max_input(token, address, to)
    }

    fn subscribe_input_config(
        &self,
        token: &str,
        address: &str,
        to: &ChainId,
        dest_token: Option<&Token>,
    ) -> Result<InputConfigStream> {
        self.core()
            .subscribe_input_config(token, address, to, dest_token)
    }

    fn create_transfer_tx(&self, params: &TransferParams) -> Result<UnsignedTransfer> {
        self.core().create_xtokens_tx(params)
    }

    async fn estimate_tx_fee(&self, params: &TransferParams) -> Result<u128> {
        self.core().estimate_tx_fee(params).await
    }

    fn cross_chain_fee(&self, token: &str, to: &ChainId) -> Result<FixedPointNumber> {
        self.core().cross_chain_fee(token, to)
    }

    fn dest_weight(&self, token: &str, to: &ChainId) -> Result<WeightLimit> {
        self.core().dest_weight(token, to)
    }

    fn get_token(&self, symbol: &str) -> Result<&Token> {
        self.core().get_token(symbol)
    }

    fn native_token(&self) -> &Token {
        self.core().native_token()
    }

    fn list_routes(&self) -> &[Route] {
        self.core().list_routes()
    }
}
