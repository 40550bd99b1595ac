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

//! Network constants
//!
//! This module provides various constants relating to the peer-to-peer
//! protocol, such as the magic header bytes of each network and the service
//! bits a node advertises.
//!
//! # Example: telling networks apart by their magic bytes
//!
//! ```rust
//! use emc_chainparams::network::constants::Network;
//!
//! let magic = Network::Testnet.magic();
//! assert_eq!(magic, [0xc4, 0xd5, 0xa6, 0xb8]);
//! assert_eq!(Network::from_magic(magic), Some(Network::Testnet));
//! assert_eq!(Network::from_magic([0xf9, 0xbe, 0xb4, 0xd9]), None);
//! ```

use std::{fmt, io, ops};
use std::str::FromStr;

use crate::consensus::encode::{self, Encodable};

/// The networks this library has parameters for
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// The production network
    Main,
    /// The public test network
    Testnet,
}

impl Network {
    /// Every supported network, main first.
    pub const ALL: [Network; 2] = [Network::Main, Network::Testnet];

    /// The canonical name of the network, also the default data directory.
    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "testnet",
        }
    }

    /// The message start bytes that prefix every peer-to-peer message.
    ///
    /// The bytes are rarely used upper ASCII, not valid as UTF-8, and produce
    /// a large 4-byte int at any alignment.
    pub fn magic(self) -> [u8; 4] {
        match self {
            Network::Main => [0xa3, 0xfb, 0xdb, 0xdb],
            Network::Testnet => [0xc4, 0xd5, 0xa6, 0xb8],
        }
    }

    /// Finds the network whose messages start with `magic`.
    pub fn from_magic(magic: [u8; 4]) -> Option<Network> {
        Network::ALL.iter().copied().find(|n| n.magic() == magic)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error in parsing network string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to parse {0} as network")]
pub struct ParseNetworkError(pub String);

impl FromStr for Network {
    type Err = ParseNetworkError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" | "mainnet" => Ok(Network::Main),
            "test" | "testnet" => Ok(Network::Testnet),
            _ => Err(ParseNetworkError(s.to_owned())),
        }
    }
}

/// Flags to indicate which network services a node supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceFlags(u64);

impl ServiceFlags {
    /// NONE means no services supported.
    pub const NONE: ServiceFlags = ServiceFlags(0);

    /// NETWORK means that the node is capable of serving the complete block chain.
    /// Seed addresses are assumed to offer it.
    pub const NETWORK: ServiceFlags = ServiceFlags(1 << 0);

    /// BLOOM means the node is capable and willing to handle bloom-filtered connections.
    pub const BLOOM: ServiceFlags = ServiceFlags(1 << 2);

    // NOTE: When adding new flags, remember to update the Display impl accordingly.

    /// Add [ServiceFlags] together.
    ///
    /// Returns itself.
    pub fn add(&mut self, other: ServiceFlags) -> ServiceFlags {
        self.0 |= other.0;
        *self
    }

    /// Check whether [ServiceFlags] are included in this one.
    pub fn has(&self, flags: ServiceFlags) -> bool {
        (self.0 | flags.0) == self.0
    }

    /// Get the integer representation of this [ServiceFlags].
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ServiceFlags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if *self == ServiceFlags::NONE {
            return write!(f, "ServiceFlags(NONE)");
        }

        let mut rest = self.0;
        let mut first = true;
        write!(f, "ServiceFlags(")?;
        for (flag, name) in [(ServiceFlags::NETWORK, "NETWORK"), (ServiceFlags::BLOOM, "BLOOM")].iter() {
            if self.has(*flag) {
                if !first {
                    write!(f, "|")?;
                }
                first = false;
                write!(f, "{}", name)?;
                rest &= !flag.0;
            }
        }
        // If there are unknown flags left, we append them in hex.
        if rest != 0 {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "0x{:x}", rest)?;
        }
        write!(f, ")")
    }
}

impl From<u64> for ServiceFlags {
    fn from(f: u64) -> Self {
        ServiceFlags(f)
    }
}

impl ops::BitOr for ServiceFlags {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self {
        self.add(rhs)
    }
}

impl ops::BitOrAssign for ServiceFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.add(rhs);
    }
}

impl Encodable for ServiceFlags {
    #[inline]
    fn consensus_encode<S: io::Write>(
        &self,
        mut s: S,
    ) -> Result<usize, encode::Error> {
        self.0.consensus_encode(&mut s)
    }
}
