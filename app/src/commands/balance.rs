use anyhow::{anyhow, Result};
use bridge_adapter::InputConfig;
use futures::StreamExt;
use tracing::warn;
use xbridge_core::{ChainId, Token};

use crate::dto::{BalanceResponse, MaxInputResponse};
use crate::state::AppState;

/// Current balance, `None` when the address is not applicable to the chain
pub async fn get_balance(
    state: &AppState,
    chain: &str,
    token: &str,
    address: &str,
) -> Result<Option<BalanceResponse>> {
    let adapter = state.adapter(chain)?;
    let mut balances = adapter.subscribe_token_balance(token, address)?;

    let Some(balance) = balances.next().await else {
        warn!(chain, address, "Address not applicable to chain");
        return Ok(None);
    };

    Ok(Some(BalanceResponse {
        chain: chain.to_string(),
        token: token.to_string(),
        address: address.to_string(),
        balance,
    }))
}

/// Current maximum transferable amount towards `to`
pub async fn get_max_input(
    state: &AppState,
    chain: &str,
    token: &str,
    address: &str,
    to: &str,
) -> Result<Option<MaxInputResponse>> {
    let adapter = state.adapter(chain)?;
    let to = ChainId::new(to);
    let mut values = adapter.subscribe_max_input(token, address, &to)?;

    let Some(max_input) = values.next().await else {
        warn!(chain, address, "Address not applicable to chain");
        return Ok(None);
    };

    Ok(Some(MaxInputResponse::new(chain, to, token, max_input?)))
}

/// Current transfer form constraints.
///
/// `dest_token` is looked up on the destination adapter when the network has one.
pub async fn get_input_config(
    state: &AppState,
    chain: &str,
    token: &str,
    address: &str,
    to: &str,
    dest_token: Option<&str>,
) -> Result<Option<InputConfig>> {
    let adapter = state.adapter(chain)?;
    let dest_token = dest_token.map(|symbol| resolve_dest_token(state, to, symbol)).transpose()?;

    let mut configs =
        adapter.subscribe_input_config(token, address, &ChainId::new(to), dest_token.as_ref())?;

    match configs.next().await {
        Some(config) => Ok(Some(config?)),
        None => {
            warn!(chain, address, "Address not applicable to chain");
            Ok(None)
        }
    }
}

fn resolve_dest_token(state: &AppState, to: &str, symbol: &str) -> Result<Token> {
    let dest = state
        .adapter(to)
        .map_err(|_| anyhow!("Destination {} is not served on this network", to))?;
    Ok(dest.get_token(symbol)?.clone())
}
