//! Turing token and route tables

use bridge_adapter::ChainTables;
use xbridge_core::{AssetIdKind, RouteSpec, TokenSpec, WeightLimit};

/// Destination weight for routes that cap execution weight
pub const DEST_WEIGHT: u64 = 5_000_000_000;

const fn token(symbol: &'static str, decimals: u32, ed: u128, raw_id: &'static str) -> TokenSpec {
    TokenSpec {
        symbol,
        name: symbol,
        decimals,
        ed,
        raw_id,
    }
}

const fn route(
    to: &'static str,
    token: &'static str,
    fee_amount: u128,
    weight_limit: WeightLimit,
) -> RouteSpec {
    RouteSpec {
        to,
        token,
        fee_token: token,
        fee_amount,
        weight_limit,
    }
}

// =============================================================================
// Turing (Kusama)
// =============================================================================

pub const TURING_TOKENS: &[TokenSpec] = &[
    token("TUR", 10, 100_000_000, "0"),
    token("KSM", 12, 100_000_000, "1"),
    token("AUSD", 12, 10_000_000_000, "2"),
    token("KAR", 12, 100_000_000_000, "3"),
    token("LKSM", 12, 500_000_000, "4"),
    token("HKO", 12, 500_000_000_000, "5"),
    token("SKSM", 12, 500_000_000, "6"),
    token("PHA", 12, 10_000_000_000, "7"),
    token("SDN", 18, 10_000_000_000_000_000, "8"),
    token("MOVR", 18, 0, "9"),
];

pub const TURING_ROUTES: &[RouteSpec] = &[
    route("moonriver", "TUR", 480_597_195, WeightLimit::Unlimited),
    route("moonriver", "MOVR", 480_597_195, WeightLimit::Unlimited),
    route("shiden", "TUR", 480_597_195, WeightLimit::Unlimited),
    route("shiden", "SDN", 480_597_195, WeightLimit::Unlimited),
];

pub const TURING: ChainTables = ChainTables {
    kind: AssetIdKind::Currency,
    tokens: TURING_TOKENS,
    routes: TURING_ROUTES,
};

// =============================================================================
// Turing Staging (Rococo)
// =============================================================================

pub const TURING_STAGING_TOKENS: &[TokenSpec] = &[
    token("TUR", 10, 100_000_000, "0"),
    token("KSM", 12, 100_000_000, "1"),
    token("AUSD", 12, 10_000_000_000, "2"),
    token("KAR", 12, 100_000_000_000, "3"),
    token("LKSM", 12, 500_000_000, "4"),
    token("HKO", 12, 500_000_000_000, "5"),
    token("SKSM", 12, 500_000_000, "6"),
    token("PHA", 12, 10_000_000_000, "7"),
    token("SDN", 18, 10_000_000_000_000_000, "8"),
    token("RSTR", 18, 1_000_000, "9"),
];

pub const TURING_STAGING_ROUTES: &[RouteSpec] = &[route(
    "rocstar",
    "TUR",
    2_560_000_000,
    WeightLimit::Limited(DEST_WEIGHT),
)];

pub const TURING_STAGING: ChainTables = ChainTables {
    kind: AssetIdKind::Currency,
    tokens: TURING_STAGING_TOKENS,
    routes: TURING_STAGING_ROUTES,
};

// =============================================================================
// Turing Local (dev)
// =============================================================================

pub const TURING_LOCAL_TOKENS: &[TokenSpec] = &[
    token("TUR", 10, 100_000_000, "0"),
    token("MGR", 18, 0, "1"),
    token("SBY", 18, 10_000_000_000_000_000, "4"),
    token("DEV", 18, 1, "5"),
];

pub const TURING_LOCAL_ROUTES: &[RouteSpec] = &[route(
    "shibuya",
    "TUR",
    2_560_000_000,
    WeightLimit::Unlimited,
)];

pub const TURING_LOCAL: ChainTables = ChainTables {
    kind: AssetIdKind::Currency,
    tokens: TURING_LOCAL_TOKENS,
    routes: TURING_LOCAL_ROUTES,
};
