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

//! Network addresses
//!
//! This module defines the structure of a peer address together with the
//! services it advertises and the time it was last seen.
//!

use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::network::constants::ServiceFlags;

/// A network address of a peer
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Address {
    /// Services provided by the peer whose address this is
    pub services: ServiceFlags,
    /// Network address and port
    pub address: SocketAddr,
    /// Last seen time, in seconds since the unix epoch
    pub time: u32,
}

impl Address {
    /// Create an address message for a socket
    pub fn new(socket: &SocketAddr, services: ServiceFlags, time: u32) -> Address {
        Address {
            services,
            address: *socket,
            time,
        }
    }

    /// The IP address of the peer
    pub fn ip(&self) -> IpAddr {
        self.address.ip()
    }

    /// The port of the peer
    pub fn port(&self) -> u16 {
        self.address.port()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (services {}, time {})", self.address, self.services, self.time)
    }
}
