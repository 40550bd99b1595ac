// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

// Seed tables. Packed entries hold the address bytes a.b.c.d in host order,
// i.e. `u32::from_le_bytes([a, b, c, d])` as the generator wrote them.

// TODO: fill in from a regenerated chainparamsseeds table; until then the
// main fixed seeds come from the literal list alone.
pub(crate) const MAIN_PACKED_SEEDS: [u32; 0] = [];

pub(crate) const TESTNET_PACKED_SEEDS: [u32; 0] = [];

pub(crate) const MAIN_HARDCODED_SEEDS: [&str; 3] = [
    "206.189.71.184",
    "37.139.28.75",
    "138.68.4.151",
];
