//! xbridge-core: Shared types, registries, errors, and configuration
//!
//! This crate provides the foundational types used across the xbridge workspace:
//! chain and token metadata, the route model, fixed-point amounts, address
//! validation, and the static chain catalogue.

pub mod address;
pub mod amount;
pub mod chains;
pub mod config;
pub mod errors;
pub mod registry;
pub mod types;

pub use amount::FixedPointNumber;
pub use chains::{ChainCatalogue, ChainSpec, Network};
pub use config::*;
pub use errors::*;
pub use registry::{RouteSpec, RouteTable, TokenSpec, TokenTable};
pub use types::*;
