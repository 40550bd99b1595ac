// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Internal helper functions for unit tests
//!
//!

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A fixed clock reading, 2020-01-01T00:00:00Z.
pub const NOW: u32 = 1577836800;

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x454d43)
}

pub fn decode_pk(pk_hex: &str) -> secp256k1::PublicKey {
    let pk = hex::decode(pk_hex).unwrap();
    secp256k1::PublicKey::from_slice(&pk[..]).unwrap()
}
