// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Startup flags
//!
//! The command line switches that choose a network, for binaries that embed
//! them with `#[command(flatten)]` or parse them directly.
//!
//! ```rust
//! use clap::Parser;
//! use emc_chainparams::cli::ChainArgs;
//! use emc_chainparams::{Network, Registry};
//!
//! let args = ChainArgs::try_parse_from(&["node", "--testnet"]).unwrap();
//! let mut registry = Registry::new().unwrap();
//! args.select(&mut registry).unwrap();
//! assert_eq!(registry.selected(), Network::Testnet);
//! ```

use clap::Parser;

use crate::chainparams::registry::{self, Registry};
use crate::chainparams::{ChainParams, Error};
use crate::network::constants::Network;

/// Network selection flags.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "emc-chainparams", about = "Chain parameters of the EMC networks", version)]
pub struct ChainArgs {
    /// Use the test network.
    #[arg(long)]
    pub testnet: bool,

    /// Select the network by name (main or testnet).
    #[arg(long, value_name = "NAME", conflicts_with = "testnet")]
    pub network: Option<String>,
}

impl ChainArgs {
    /// The network the flags ask for.
    pub fn network(&self) -> Result<Network, Error> {
        match self.network {
            Some(ref name) => Ok(name.parse::<Network>()?),
            None if self.testnet => Ok(Network::Testnet),
            None => Ok(Network::Main),
        }
    }

    /// Applies the flags to a registry.
    pub fn select(&self, registry: &mut Registry) -> Result<(), Error> {
        match self.network {
            Some(ref name) => registry.select_by_name(name),
            None => {
                registry.select_from_flag(self.testnet);
                Ok(())
            }
        }
    }

    /// Applies the flags to the process-wide parameters.
    pub fn select_params(&self) -> Result<&'static ChainParams, Error> {
        registry::select_params(self.network()?)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::ChainArgs;
    use crate::chainparams::registry::Registry;
    use crate::chainparams::Error;
    use crate::network::constants::Network;

    fn parse(args: &[&str]) -> Result<ChainArgs, clap::Error> {
        ChainArgs::try_parse_from(args)
    }

    #[test]
    fn defaults_to_main() {
        let args = parse(&["emc-chainparams"]).unwrap();
        assert_eq!(args, ChainArgs::default());
        assert_eq!(args.network(), Ok(Network::Main));
    }

    #[test]
    fn testnet_flag() {
        let args = parse(&["emc-chainparams", "--testnet"]).unwrap();
        assert!(args.testnet);
        assert_eq!(args.network(), Ok(Network::Testnet));

        let mut registry = Registry::new().unwrap();
        args.select(&mut registry).unwrap();
        assert_eq!(registry.current().network(), Network::Testnet);
    }

    #[test]
    fn network_by_name() {
        let args = parse(&["emc-chainparams", "--network", "test"]).unwrap();
        assert_eq!(args.network(), Ok(Network::Testnet));

        let args = parse(&["emc-chainparams", "--network", "regtest"]).unwrap();
        assert_eq!(args.network(), Err(Error::UnknownNetwork("regtest".to_owned())));

        let mut registry = Registry::new().unwrap();
        registry.select(Network::Testnet);
        assert!(args.select(&mut registry).is_err());
        assert_eq!(registry.selected(), Network::Testnet);
    }

    #[test]
    fn flags_conflict() {
        let err = parse(&["emc-chainparams", "--testnet", "--network", "main"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
