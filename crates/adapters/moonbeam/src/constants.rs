//! Moonbeam and Moonriver token and route tables

use bridge_adapter::ChainTables;
use xbridge_core::{AssetIdKind, RouteSpec, TokenSpec, WeightLimit};

const fn asset(symbol: &'static str, decimals: u32, raw_id: &'static str) -> TokenSpec {
    TokenSpec {
        symbol,
        name: symbol,
        decimals,
        ed: 0,
        raw_id,
    }
}

// =============================================================================
// Moonbeam (Polkadot)
// =============================================================================

pub const MOONBEAM_TOKENS: &[TokenSpec] = &[TokenSpec {
    symbol: "GLMR",
    name: "GLMR",
    decimals: 18,
    ed: 100_000_000_000_000_000,
    raw_id: "0",
}];

pub const MOONBEAM: ChainTables = ChainTables {
    kind: AssetIdKind::Asset,
    tokens: MOONBEAM_TOKENS,
    routes: &[],
};

// =============================================================================
// Moonriver (Kusama)
// =============================================================================

pub const MOONRIVER_TOKENS: &[TokenSpec] = &[
    TokenSpec {
        symbol: "MOVR",
        name: "MOVR",
        decimals: 18,
        ed: 1_000_000_000_000_000,
        raw_id: "0",
    },
    asset("xcCSM", 12, "108457044225666871745333730479173774551"),
    asset("xcSDN", 18, "16797826370226091782818345603793389938"),
    asset("xcHKO", 12, "76100021443485661246318545281171740067"),
    asset("xcKBTC", 8, "328179947973504579459046439826496046832"),
    asset("xcXRT", 9, "108036400430056508975016746969135344601"),
    asset("xcTUR", 10, "133300872918374599700079037156071917454"),
    asset("xcKMA", 12, "213357169630950964874127107356898319277"),
    asset("xcLIT", 12, "65216491554813189869575508812319036608"),
    asset("xcCRAB", 18, "173481220575862801646329923366065693029"),
    asset("xcPHA", 12, "189307976387032586987344677431204943363"),
    asset("xcvKSM", 12, "264344629840762281112027368930249420542"),
    asset("xcvBNC", 12, "72145018963825376852137222787619937732"),
    asset("xcaSeed", 12, "214920334981412447805621250067209749032"),
    asset("xcKINT", 12, "175400718394635817552109270754364440562"),
    asset("xcPICA", 12, "167283995827706324502761431814209211090"),
    asset("xcTEER", 12, "105075627293246237499203909093923548958"),
    asset("xcMGX", 18, "118095707745084482624853002839493125353"),
    asset("xcvMOVR", 18, "203223821023327994093278529517083736593"),
    asset("xcUSDT", 6, "311091173110107856861649819128533077277"),
    asset("xcRMRK", 10, "182365888117048807484804376330534607370"),
    asset("xcKSM", 12, "42259045809535163221576417993425387648"),
    asset("xcKAR", 12, "1081058159293365152112170237638664357"),
    asset("xcBNC", 12, "319623561105283008236062145480775032445"),
];

pub const MOONRIVER_ROUTES: &[RouteSpec] = &[
    RouteSpec {
        to: "turing",
        token: "MOVR",
        fee_token: "MOVR",
        fee_amount: 1_000_000_000_000_000,
        weight_limit: WeightLimit::Unlimited,
    },
    // Fee is charged in TUR on Turing
    RouteSpec {
        to: "turing",
        token: "xcTUR",
        fee_token: "TUR",
        fee_amount: 2_000_000_000,
        weight_limit: WeightLimit::Unlimited,
    },
];

pub const MOONRIVER: ChainTables = ChainTables {
    kind: AssetIdKind::Asset,
    tokens: MOONRIVER_TOKENS,
    routes: MOONRIVER_ROUTES,
};
