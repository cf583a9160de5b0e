use anyhow::Result;
use bridge_adapter::CrossChainAdapter;

use crate::dto::RouteResponse;
use crate::state::AppState;

/// Outbound routes of `chain`, or of every adapter in the network
pub fn list_routes(state: &AppState, chain: Option<&str>) -> Result<Vec<RouteResponse>> {
    let adapters: Vec<&dyn CrossChainAdapter> = match chain {
        Some(chain) => vec![state.adapter(chain)?],
        None => state.adapters().collect(),
    };

    let mut routes = Vec::new();
    for adapter in adapters {
        for route in adapter.list_routes() {
            routes.push(RouteResponse {
                from: route.from.clone(),
                to: route.to.clone(),
                token: route.token.clone(),
                fee_token: route.fee.token.clone(),
                fee: adapter.cross_chain_fee(&route.token, &route.to)?,
                weight_limit: route.weight_limit,
            });
        }
    }
    Ok(routes)
}
