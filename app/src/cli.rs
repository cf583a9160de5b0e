//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use xbridge_core::Network;

/// xbridge: cross-chain balances, transfer capacity and unsigned transfers
#[derive(Parser, Debug)]
#[command(name = "xbridge", version)]
#[command(about = "Inspect cross-chain balances and build unsigned XCM transfers")]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Network environment, overrides the configuration file
    #[arg(short, long, value_enum)]
    pub network: Option<NetworkArg>,

    /// Replay file with recorded storage values, overrides the configuration file
    #[arg(short, long)]
    pub replay: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Current balance of a token for an address
    Balance {
        chain: String,
        token: String,
        address: String,
    },

    /// Maximum transferable amount towards a destination chain
    MaxInput {
        chain: String,
        token: String,
        address: String,
        /// Destination chain
        to: String,
    },

    /// Transfer form limits and fees
    InputConfig {
        chain: String,
        token: String,
        address: String,
        to: String,
        /// Token symbol on the destination chain, adds its existential deposit to the minimum
        #[arg(long)]
        dest_token: Option<String>,
    },

    /// Outbound routes, for one chain or every chain in the network
    Routes { chain: Option<String> },

    /// Build an unsigned xTokens transfer
    Transfer {
        chain: String,
        token: String,
        /// Decimal amount, e.g. "1.5"
        amount: String,
        /// Sender address
        address: String,
        to: String,
        /// Recipient address on the destination chain
        to_address: String,
        /// Signing account, defaults to the sender
        #[arg(long)]
        signer: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkArg {
    Dev,
    Rococo,
    Kusama,
    Polkadot,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Dev => Network::Dev,
            NetworkArg::Rococo => Network::Rococo,
            NetworkArg::Kusama => Network::Kusama,
            NetworkArg::Polkadot => Network::Polkadot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_max_input() {
        let cli = Cli::try_parse_from([
            "xbridge",
            "--network",
            "kusama",
            "max-input",
            "turing",
            "TUR",
            "6AwtFW6sYcQ8RcuAJeXdDKuFtUVXj4xW57ghjYQ5xyciT1yd",
            "moonriver",
        ])
        .unwrap();

        assert_eq!(cli.network, Some(NetworkArg::Kusama));
        assert!(matches!(cli.command, Command::MaxInput { ref to, .. } if to == "moonriver"));
    }

    #[test]
    fn test_parse_transfer_with_signer() {
        let cli = Cli::try_parse_from([
            "xbridge", "transfer", "turing", "TUR", "1.5", "alice", "moonriver", "0xabc",
            "--signer", "bob",
        ])
        .unwrap();

        let Command::Transfer { amount, signer, .. } = cli.command else {
            panic!("expected transfer");
        };
        assert_eq!(amount, "1.5");
        assert_eq!(signer.as_deref(), Some("bob"));
    }

    #[test]
    fn test_routes_chain_is_optional() {
        let cli = Cli::try_parse_from(["xbridge", "routes"]).unwrap();
        assert!(matches!(cli.command, Command::Routes { chain: None }));
    }
}
