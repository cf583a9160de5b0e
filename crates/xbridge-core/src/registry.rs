//! Per-chain token and route tables
//!
//! Tables are declared as static data in each chain crate and validated here
//! when an adapter is constructed. After loading, raw identifiers are already
//! resolved and every route references a known token and chain.

use std::collections::HashSet;

use crate::amount::MAX_PRECISION;
use crate::chains::ChainCatalogue;
use crate::errors::RegistryError;
use crate::types::{AssetIdKind, ChainId, Route, RouteFee, Token, WeightLimit};

/// Static token table entry
#[derive(Debug, Clone, Copy)]
pub struct TokenSpec {
    pub symbol: &'static str,
    pub name: &'static str,
    pub decimals: u32,
    pub ed: u128,
    /// "0" for the native token, otherwise the chain's asset identifier
    pub raw_id: &'static str,
}

/// Validated token table for one chain
#[derive(Debug, Clone)]
pub struct TokenTable {
    tokens: Vec<Token>,
    native: usize,
}

impl TokenTable {
    /// Resolve raw ids and validate a chain's token table.
    ///
    /// Requires unique symbols, exactly one native token and supported precision.
    pub fn load(
        chain: &ChainId,
        kind: AssetIdKind,
        specs: &[TokenSpec],
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut tokens = Vec::with_capacity(specs.len());

        for spec in specs {
            if !seen.insert(spec.symbol) {
                return Err(RegistryError::DuplicateToken {
                    chain: chain.to_string(),
                    token: spec.symbol.to_string(),
                });
            }

            if spec.decimals > MAX_PRECISION {
                return Err(RegistryError::UnsupportedPrecision {
                    token: spec.symbol.to_string(),
                    decimals: spec.decimals,
                });
            }

            let asset_id = kind
                .resolve(spec.raw_id)
                .ok_or_else(|| RegistryError::InvalidRawId {
                    chain: chain.to_string(),
                    token: spec.symbol.to_string(),
                    raw: spec.raw_id.to_string(),
                })?;

            tokens.push(Token {
                symbol: spec.symbol.to_string(),
                name: spec.name.to_string(),
                decimals: spec.decimals,
                ed: spec.ed,
                asset_id,
            });
        }

        let natives: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_native())
            .map(|(i, _)| i)
            .collect();

        let &[native] = natives.as_slice() else {
            return Err(RegistryError::NativeToken {
                chain: chain.to_string(),
                count: natives.len(),
            });
        };

        Ok(Self { tokens, native })
    }

    pub fn get(&self, symbol: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    pub fn native(&self) -> &Token {
        &self.tokens[self.native]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Static route table entry (the source chain is implied by the table)
#[derive(Debug, Clone, Copy)]
pub struct RouteSpec {
    pub to: &'static str,
    pub token: &'static str,
    pub fee_token: &'static str,
    pub fee_amount: u128,
    pub weight_limit: WeightLimit,
}

/// Validated outbound routes of one chain
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Validate routes against the source token table and the chain catalogue
    pub fn load(
        from: &ChainId,
        specs: &[RouteSpec],
        tokens: &TokenTable,
        catalogue: &ChainCatalogue,
    ) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut routes = Vec::with_capacity(specs.len());

        for spec in specs {
            if tokens.get(spec.token).is_none() {
                return Err(RegistryError::RouteTokenMissing {
                    from: from.to_string(),
                    to: spec.to.to_string(),
                    token: spec.token.to_string(),
                });
            }

            catalogue.require(spec.to)?;

            if spec.to == from.as_str() {
                return Err(RegistryError::RouteToSelf {
                    chain: from.to_string(),
                    token: spec.token.to_string(),
                });
            }

            if !seen.insert((spec.to, spec.token)) {
                return Err(RegistryError::DuplicateRoute {
                    from: from.to_string(),
                    to: spec.to.to_string(),
                    token: spec.token.to_string(),
                });
            }

            routes.push(Route {
                from: from.clone(),
                to: ChainId::new(spec.to),
                token: spec.token.to_string(),
                fee: RouteFee {
                    token: spec.fee_token.to_string(),
                    amount: spec.fee_amount,
                },
                weight_limit: spec.weight_limit,
            });
        }

        tracing::debug!(chain = %from, routes = routes.len(), "Route table loaded");

        Ok(Self { routes })
    }

    pub fn find(&self, to: &ChainId, token: &str) -> Option<&Route> {
        self.routes.iter().find(|r| &r.to == to && r.token == token)
    }

    pub fn all(&self) -> &[Route] {
        &self.routes
    }
}
