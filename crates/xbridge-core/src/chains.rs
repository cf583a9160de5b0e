//! Static chain catalogue
//!
//! Chains are grouped by network environment. The catalogue is validated once
//! (unique ids) and then shared read-only for the life of the process.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::types::{Chain, ChainId, ChainType};

/// Network environment a chain belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Dev,
    Rococo,
    Kusama,
    Polkadot,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Rococo => "rococo",
            Self::Kusama => "kusama",
            Self::Polkadot => "polkadot",
        }
    }

    /// Static chain entries for this environment
    pub fn chain_specs(&self) -> &'static [ChainSpec] {
        match self {
            Self::Dev => DEV_CHAINS,
            Self::Rococo => ROCOCO_CHAINS,
            Self::Kusama => KUSAMA_CHAINS,
            Self::Polkadot => POLKADOT_CHAINS,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Static chain table entry
#[derive(Debug, Clone, Copy)]
pub struct ChainSpec {
    pub id: &'static str,
    pub display: &'static str,
    pub chain_type: ChainType,
    pub para_chain_id: Option<u32>,
    pub ss58_prefix: u16,
}

impl ChainSpec {
    fn to_chain(self) -> Chain {
        Chain {
            id: ChainId::new(self.id),
            display: self.display.to_string(),
            chain_type: self.chain_type,
            para_chain_id: self.para_chain_id,
            ss58_prefix: self.ss58_prefix,
        }
    }
}

const fn substrate(
    id: &'static str,
    display: &'static str,
    para_chain_id: Option<u32>,
    ss58_prefix: u16,
) -> ChainSpec {
    ChainSpec {
        id,
        display,
        chain_type: ChainType::Substrate,
        para_chain_id,
        ss58_prefix,
    }
}

pub const DEV_CHAINS: &[ChainSpec] = &[
    substrate("rococo-local", "Rococo Local", None, 42),
    substrate("turing-local", "Turing Local", Some(2114), 51),
    substrate("shibuya", "Shibuya", Some(2000), 5),
];

pub const ROCOCO_CHAINS: &[ChainSpec] = &[
    substrate("rococo", "Rococo", None, 42),
    substrate("turing-staging", "Turing Staging", Some(2114), 51),
    substrate("rocstar", "rocstar", Some(2006), 5),
];

pub const KUSAMA_CHAINS: &[ChainSpec] = &[
    substrate("kusama", "Kusama", None, 2),
    substrate("turing", "Turing", Some(2114), 51),
    ChainSpec {
        id: "moonriver",
        display: "Moonriver",
        chain_type: ChainType::Ethereum,
        para_chain_id: Some(2023),
        ss58_prefix: 1285,
    },
    substrate("shiden", "Shiden", Some(2007), 5),
];

pub const POLKADOT_CHAINS: &[ChainSpec] = &[
    substrate("polkadot", "Polkadot", None, 0),
    ChainSpec {
        id: "moonbeam",
        display: "Moonbeam",
        chain_type: ChainType::Ethereum,
        para_chain_id: Some(2004),
        ss58_prefix: 1284,
    },
];

/// Validated, read-only set of known chains
#[derive(Debug, Clone)]
pub struct ChainCatalogue {
    chains: Vec<Chain>,
}

static BUILTIN: OnceLock<Result<ChainCatalogue, RegistryError>> = OnceLock::new();

impl ChainCatalogue {
    /// Build a catalogue, rejecting duplicate ids
    pub fn load<'a>(specs: impl IntoIterator<Item = &'a ChainSpec>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();
        let mut chains = Vec::new();

        for spec in specs {
            if !seen.insert(spec.id) {
                return Err(RegistryError::DuplicateChain {
                    chain: spec.id.to_string(),
                });
            }
            chains.push(spec.to_chain());
        }

        Ok(Self { chains })
    }

    /// The process-wide catalogue of every built-in network
    pub fn builtin() -> Result<&'static ChainCatalogue, RegistryError> {
        BUILTIN
            .get_or_init(|| {
                let specs = [
                    Network::Dev,
                    Network::Rococo,
                    Network::Kusama,
                    Network::Polkadot,
                ]
                .into_iter()
                .flat_map(|network| network.chain_specs().iter());
                Self::load(specs)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn get(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id.as_str() == id)
    }

    /// Look up a chain, failing with `UnknownChain`
    pub fn require(&self, id: &str) -> Result<&Chain, RegistryError> {
        self.get(id).ok_or_else(|| RegistryError::UnknownChain {
            chain: id.to_string(),
        })
    }

    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
}
