// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Seed addresses
//!
//! Peers supplied out of band to bootstrap discovery. Each seed gets a
//! synthetic "last seen" time between one and two weeks in the past, so that
//! nodes do not all prefer the same seed and drop seeds quickly once real
//! peers are known.
//!
//! # Example
//!
//! ```rust
//! use emc_chainparams::network::seeds::convert_seeds;
//!
//! let seeds = convert_seeds(&[0x01020304], 21507);
//! assert_eq!(seeds[0].address.to_string(), "4.3.2.1:21507");
//! ```

use std::net::{AddrParseError, Ipv4Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use tracing::warn;

use crate::network::address::Address;
use crate::network::constants::ServiceFlags;

/// Seconds in one week.
pub const ONE_WEEK: u32 = 7 * 24 * 60 * 60;

/// A seed entry that could not be turned into an address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    /// The entry was an empty string.
    #[error("empty seed entry")]
    Empty,
    /// The entry was not a textual IPv4 address.
    #[error("invalid seed address {0:?}")]
    InvalidIp(String, #[source] AddrParseError),
}

/// Reinterprets a packed seed entry as an IPv4 address.
///
/// The bytes are reassembled with shifts and masks so the result does not
/// depend on the endianness of the host: `0x01020304` becomes `4.3.2.1`.
pub fn unpack_ipv4(entry: u32) -> Ipv4Addr {
    let ip = (entry & 0x0000_00ff) << 24
        | (entry & 0x0000_ff00) << 8
        | (entry & 0x00ff_0000) >> 8
        | (entry & 0xff00_0000) >> 24;
    Ipv4Addr::from(ip)
}

/// A "last seen" time uniformly distributed in `(now - 2 weeks, now - 1 week]`.
pub fn seed_time<R: Rng + ?Sized>(now: u32, rng: &mut R) -> u32 {
    now.saturating_sub(rng.gen_range(0..ONE_WEEK)).saturating_sub(ONE_WEEK)
}

fn seed_address<R: Rng + ?Sized>(ip: Ipv4Addr, port: u16, now: u32, rng: &mut R) -> Address {
    let socket = SocketAddr::from((ip, port));
    Address::new(&socket, ServiceFlags::NETWORK, seed_time(now, rng))
}

/// Converts a packed seed table into addresses on `port`, using the system
/// clock and the thread-local random number generator.
pub fn convert_seeds(entries: &[u32], port: u16) -> Vec<Address> {
    convert_seeds_with(entries, port, unix_now(), &mut rand::thread_rng())
}

/// Converts a packed seed table into addresses on `port`, with an explicit
/// clock reading and random number generator.
pub fn convert_seeds_with<R: Rng + ?Sized>(
    entries: &[u32],
    port: u16,
    now: u32,
    rng: &mut R,
) -> Vec<Address> {
    entries
        .iter()
        .map(|&entry| seed_address(unpack_ipv4(entry), port, now, rng))
        .collect()
}

/// Parses a single textual IPv4 seed into an address on `port`.
pub fn parse_seed<R: Rng + ?Sized>(
    ip: &str,
    port: u16,
    now: u32,
    rng: &mut R,
) -> Result<Address, SeedError> {
    let ip = ip.trim();
    if ip.is_empty() {
        return Err(SeedError::Empty);
    }
    let parsed = ip
        .parse::<Ipv4Addr>()
        .map_err(|e| SeedError::InvalidIp(ip.to_owned(), e))?;
    Ok(seed_address(parsed, port, now, rng))
}

/// Loads textual IPv4 seeds into addresses on `port`, using the system clock
/// and the thread-local random number generator.
///
/// Malformed and empty entries are skipped with a warning.
pub fn load_hardcoded_seeds(ips: &[&str], port: u16) -> Vec<Address> {
    load_hardcoded_seeds_with(ips, port, unix_now(), &mut rand::thread_rng())
}

/// Loads textual IPv4 seeds into addresses on `port`, with an explicit clock
/// reading and random number generator.
///
/// Malformed and empty entries are skipped with a warning.
pub fn load_hardcoded_seeds_with<R: Rng + ?Sized>(
    ips: &[&str],
    port: u16,
    now: u32,
    rng: &mut R,
) -> Vec<Address> {
    ips.iter()
        .filter_map(|ip| match parse_seed(ip, port, now, rng) {
            Ok(addr) => Some(addr),
            Err(e) => {
                warn!(seed = *ip, error = %e, "skipping hardcoded seed");
                None
            }
        })
        .collect()
}

/// Seconds since the unix epoch, truncated to the 32 bits addresses carry.
fn unix_now() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{seeded_rng, NOW};

    #[test]
    fn unpack_swaps_bytes() {
        assert_eq!(unpack_ipv4(0x01020304), Ipv4Addr::new(4, 3, 2, 1));
        assert_eq!(unpack_ipv4(0xb847bdce), Ipv4Addr::new(206, 189, 71, 184));
        assert_eq!(unpack_ipv4(0), Ipv4Addr::new(0, 0, 0, 0));
    }

    #[test]
    fn convert_packed_entries() {
        let mut rng = seeded_rng();
        let seeds = convert_seeds_with(&[0x01020304, 0x9704448a], 21507, NOW, &mut rng);

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].address.to_string(), "4.3.2.1:21507");
        assert_eq!(seeds[1].address.to_string(), "138.68.4.151:21507");
        for seed in &seeds {
            assert_eq!(seed.services, ServiceFlags::NETWORK);
            assert!(seed.time >= NOW - 2 * ONE_WEEK);
            assert!(seed.time <= NOW - ONE_WEEK);
        }
    }

    #[test]
    fn convert_is_deterministic_apart_from_time() {
        let a = convert_seeds(&[0x4b1c8b25], 23707);
        let b = convert_seeds(&[0x4b1c8b25], 23707);
        assert_eq!(a[0].address, b[0].address);
        assert_eq!(a[0].services, b[0].services);
    }

    #[test]
    fn convert_empty_table() {
        assert!(convert_seeds(&[], 21507).is_empty());
        assert!(convert_seeds_with(&[], 21507, NOW, &mut seeded_rng()).is_empty());
    }

    #[test]
    fn seed_time_range() {
        let mut rng = seeded_rng();
        for _ in 0..1000 {
            let t = seed_time(NOW, &mut rng);
            assert!(t > NOW - 2 * ONE_WEEK);
            assert!(t <= NOW - ONE_WEEK);
        }
        // Never wraps around on a clock near the epoch.
        assert_eq!(seed_time(ONE_WEEK / 2, &mut rng), 0);
    }

    #[test]
    fn parse_seed_errors() {
        let mut rng = seeded_rng();
        assert_eq!(parse_seed("", 21507, NOW, &mut rng), Err(SeedError::Empty));
        assert_eq!(parse_seed("  ", 21507, NOW, &mut rng), Err(SeedError::Empty));
        match parse_seed("256.1.1.1", 21507, NOW, &mut rng) {
            Err(SeedError::InvalidIp(ip, _)) => assert_eq!(ip, "256.1.1.1"),
            other => panic!("unexpected result: {:?}", other),
        }
        let addr = parse_seed("37.139.28.75", 21507, NOW, &mut rng).unwrap();
        assert_eq!(addr.ip(), Ipv4Addr::new(37, 139, 28, 75));
        assert_eq!(addr.port(), 21507);
    }

    #[test]
    fn load_skips_bad_entries() {
        let mut rng = seeded_rng();
        let ips = ["206.189.71.184", "", "not an ip", "138.68.4.151"];
        let seeds = load_hardcoded_seeds_with(&ips, 21507, NOW, &mut rng);

        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].address.to_string(), "206.189.71.184:21507");
        assert_eq!(seeds[1].address.to_string(), "138.68.4.151:21507");
        for seed in &seeds {
            assert!(seed.time >= NOW - 2 * ONE_WEEK && seed.time <= NOW - ONE_WEEK);
        }
        assert!(load_hardcoded_seeds(&[], 21507).is_empty());
    }
}
