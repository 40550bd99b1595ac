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
// Changes for rust-tapyrus is licensed as below.
// Copyright (c) 2019 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.
//

//! Consensus parameters
//!
//! This module provides predefined set of parameters for different chains.
//! Testnet starts from the main values and overrides only what differs.
//!

use rug::Integer;

use crate::network::constants::Network;
use crate::util::bignum;

/// Right shift applied to the all-ones 256-bit value to obtain the easiest
/// allowed target, giving a compact encoding of `0x1f00ffff`.
pub const POW_LIMIT_SHIFT: u32 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Parameters that influence chain consensus.
pub struct Params {
    /// Network for which parameters are valid.
    pub network: Network,
    /// Proof of work limit value. It contains the lowest possible difficulty.
    pub pow_limit: Integer,
    /// Height of the last block that may be mined with proof of work.
    pub last_pow_block: u32,
    /// Height from which blocks may be minted with proof of stake.
    pub pos_start_block: u32,
}

impl Params {
    /// Creates parameters set for the given network.
    pub fn new(network: Network) -> Self {
        let main = Params {
            network: Network::Main,
            pow_limit: bignum::pow_limit(POW_LIMIT_SHIFT),
            last_pow_block: 225_000,
            pos_start_block: 2_250,
        };

        match network {
            Network::Main => main,
            Network::Testnet => Params {
                network: Network::Testnet,
                pow_limit: bignum::pow_limit(POW_LIMIT_SHIFT),
                last_pow_block: 225_000,
                ..main
            },
        }
    }

    /// The proof of work limit in compact form, as stored in a block header.
    pub fn pow_limit_bits(&self) -> u32 {
        bignum::compact_from_target(&self.pow_limit)
    }

    /// Whether a block at `height` may still carry proof of work.
    pub fn is_proof_of_work_height(&self, height: u32) -> bool {
        height <= self.last_pow_block
    }

    /// Whether a block at `height` may carry proof of stake.
    ///
    /// Proof of stake starts long before proof of work ends, so both can hold
    /// for the same height.
    pub fn is_proof_of_stake_height(&self, height: u32) -> bool {
        height >= self.pos_start_block
    }
}
