// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Parameter selection
//!
//! A [`Registry`] owns the parameter sets of every network and knows which
//! one is active. Subsystems that can be handed a registry (or a
//! `&ChainParams` taken from it) should be; the process-wide functions below
//! exist for code that cannot.
//!
//! The process-wide selection is written once. Selecting the same network
//! again is harmless, switching to another network afterwards is an error.

use once_cell::sync::OnceCell;
use tracing::info;

use crate::chainparams::{testnet_from_main, ChainParams, Error};
use crate::network::constants::Network;

/// The parameter sets of all networks, one of them selected.
#[derive(Clone, Debug)]
pub struct Registry {
    main: ChainParams,
    testnet: ChainParams,
    selected: Network,
}

impl Registry {
    /// Builds and checks the parameters of every network. Main is selected.
    pub fn new() -> Result<Registry, Error> {
        let main = ChainParams::new(Network::Main)?;
        let testnet = testnet_from_main(main.clone())?;
        main.check_distinct(&testnet)?;

        Ok(Registry {
            main,
            testnet,
            selected: Network::Main,
        })
    }

    /// Makes `network` the active one.
    pub fn select(&mut self, network: Network) {
        info!(%network, "selected chain parameters");
        self.selected = network;
    }

    /// Makes the network called `name` the active one. An unknown name
    /// leaves the selection unchanged.
    pub fn select_by_name(&mut self, name: &str) -> Result<(), Error> {
        let network = name.parse::<Network>()?;
        self.select(network);
        Ok(())
    }

    /// Selects testnet when the startup flag is set and main otherwise.
    /// Always succeeds.
    pub fn select_from_flag(&mut self, testnet: bool) -> bool {
        self.select(if testnet { Network::Testnet } else { Network::Main });
        true
    }

    /// The active network.
    pub fn selected(&self) -> Network {
        self.selected
    }

    /// Parameters of the active network.
    pub fn current(&self) -> &ChainParams {
        self.get(self.selected)
    }

    /// Parameters of any network.
    pub fn get(&self, network: Network) -> &ChainParams {
        match network {
            Network::Main => &self.main,
            Network::Testnet => &self.testnet,
        }
    }

    /// Consumes the registry, keeping only the active parameters.
    pub fn into_current(self) -> ChainParams {
        match self.selected {
            Network::Main => self.main,
            Network::Testnet => self.testnet,
        }
    }
}

static SELECTED: OnceCell<ChainParams> = OnceCell::new();

fn init(network: Network) -> Result<ChainParams, Error> {
    let mut registry = Registry::new()?;
    registry.select(network);
    Ok(registry.into_current())
}

/// Selects the process-wide parameters.
///
/// The first call fixes the network. Later calls for the same network return
/// the same parameters, calls for another network fail with
/// [`Error::AlreadySelected`].
pub fn select_params(network: Network) -> Result<&'static ChainParams, Error> {
    let params = SELECTED.get_or_try_init(|| init(network))?;
    if params.network() != network {
        return Err(Error::AlreadySelected {
            selected: params.network(),
            requested: network,
        });
    }
    Ok(params)
}

/// Selects the process-wide parameters from the testnet startup flag.
pub fn select_params_from_flag(testnet: bool) -> Result<&'static ChainParams, Error> {
    select_params(if testnet { Network::Testnet } else { Network::Main })
}

/// The network of the process-wide parameters, if they were initialized.
pub fn selected_network() -> Option<Network> {
    SELECTED.get().map(ChainParams::network)
}

/// The process-wide parameters, main unless another network was selected
/// first.
///
/// # Panics
///
/// Panics when the main parameters fail their own checks, which can only
/// happen in a broken build.
pub fn params() -> &'static ChainParams {
    SELECTED
        .get_or_try_init(|| init(Network::Main))
        .unwrap_or_else(|e| panic!("chain parameters are corrupt: {}", e))
}
