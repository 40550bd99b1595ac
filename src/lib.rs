// Rust Bitcoin Library
// Written in 2014 by
//   Andrew Poelstra <apoelstra@wpsoftware.net>
//
// To the extent possible under law, the author(s) have dedicated all
// copyright and related and neighboring rights to this software to
// the public domain worldwide. This software is distributed without
// any warranty.
//
// You should have received a copy of the CC0 Public Domain Dedication
// along with this software.
// If not, see <http://creativecommons.org/publicdomain/zero/1.0/>.
//

//! # EMC Chain Parameters
//!
//! This library holds the network-specific constants of the EMC proof-of-work /
//! proof-of-stake networks: message-start bytes, ports, base58 version prefixes,
//! the genesis block, seed peers and the consensus switchover heights.
//!
//! Every parameter set verifies its own genesis block when it is built. The
//! [`Registry`] holds both networks and tracks which one is active; the
//! process-wide [`params`] accessor wraps a registry selection behind a
//! write-once barrier.
//!
//! ```rust
//! use emc_chainparams::{Network, Registry};
//!
//! let mut registry = Registry::new().unwrap();
//! registry.select_from_flag(true);
//! assert_eq!(registry.current().network(), Network::Testnet);
//! assert_eq!(registry.current().default_port(), 23707);
//! ```
//!

// Coding conventions
#![forbid(unsafe_code)]
#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![deny(dead_code)]
#![deny(unused_imports)]
#![deny(missing_docs)]

// Re-exported dependencies.
#[macro_use]
pub extern crate bitcoin_hashes as hashes;
pub extern crate rug;
pub extern crate secp256k1;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(test)]
mod test_helpers;
pub mod hash_types;
pub mod network;
pub mod blockdata;
pub mod consensus;
pub mod util;
pub mod chainparams;
pub mod cli;

pub use crate::hash_types::*;
pub use crate::blockdata::block::Block;
pub use crate::blockdata::block::BlockHeader;
pub use crate::blockdata::script::Script;
pub use crate::blockdata::transaction::Transaction;
pub use crate::blockdata::transaction::TxIn;
pub use crate::blockdata::transaction::TxOut;
pub use crate::blockdata::transaction::OutPoint;
pub use crate::chainparams::{Base58Type, ChainParams, DnsSeed, Error};
pub use crate::chainparams::registry::{params, select_params, select_params_from_flag, selected_network, Registry};
pub use crate::network::address::Address;
pub use crate::network::constants::{Network, ServiceFlags};
