//! CLI command handlers
//!
//! Each handler takes the first value of the relevant stream and returns a
//! serializable response.

mod balance;
mod routes;
mod transfer;

pub use balance::*;
pub use routes::*;
pub use transfer::*;

use anyhow::Result;
use serde_json::Value;

use crate::cli::Command;
use crate::state::AppState;

/// Run a command and return its JSON output (`null` when the address belongs
/// to another chain family)
pub async fn dispatch(state: &AppState, command: Command) -> Result<Value> {
    let value = match command {
        Command::Balance {
            chain,
            token,
            address,
        } => serde_json::to_value(get_balance(state, &chain, &token, &address).await?)?,
        Command::MaxInput {
            chain,
            token,
            address,
            to,
        } => serde_json::to_value(get_max_input(state, &chain, &token, &address, &to).await?)?,
        Command::InputConfig {
            chain,
            token,
            address,
            to,
            dest_token,
        } => serde_json::to_value(
            get_input_config(state, &chain, &token, &address, &to, dest_token.as_deref()).await?,
        )?,
        Command::Routes { chain } => serde_json::to_value(list_routes(state, chain.as_deref())?)?,
        Command::Transfer {
            chain,
            token,
            amount,
            address,
            to,
            to_address,
            signer,
        } => {
            let request = TransferRequest {
                token,
                amount,
                signer: signer.unwrap_or_else(|| address.clone()),
                address,
                to,
                to_address,
            };
            serde_json::to_value(build_transfer(state, &chain, &request)?)?
        }
    };
    Ok(value)
}
