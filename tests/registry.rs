// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Registry behaviour seen from outside the crate.

use emc_chainparams::{Base58Type, Network, Registry};

#[test]
fn flag_selection_matches_explicit_selection() {
    let mut registry = Registry::new().unwrap();
    assert_eq!(registry.current().network(), Network::Main);

    assert!(registry.select_from_flag(true));
    assert_eq!(registry.current(), registry.get(Network::Testnet));

    assert!(registry.select_from_flag(false));
    assert_eq!(registry.current(), registry.get(Network::Main));
}

#[test]
fn networks_never_share_identifiers() {
    let registry = Registry::new().unwrap();
    let main = registry.get(Network::Main);
    let test = registry.get(Network::Testnet);

    assert_ne!(main.message_start(), test.message_start());
    assert_ne!(main.default_port(), test.default_port());
    assert_ne!(main.rpc_port(), test.rpc_port());
    for kind in Base58Type::ALL.iter() {
        assert_ne!(main.base58_prefix(*kind), test.base58_prefix(*kind), "{}", kind);
    }
    assert_eq!(Network::from_magic(main.message_start()), Some(Network::Main));
    assert_eq!(Network::from_magic(test.message_start()), Some(Network::Testnet));
}

#[test]
fn testnet_inherits_switchover_heights() {
    let registry = Registry::new().unwrap();
    let main = registry.get(Network::Main);
    let test = registry.get(Network::Testnet);

    assert_eq!(test.last_pow_block(), main.last_pow_block());
    assert_eq!(test.pos_start_block(), main.pos_start_block());
    assert!(test.consensus().is_proof_of_work_height(225_000));
    assert!(!test.consensus().is_proof_of_work_height(225_001));
    assert!(test.consensus().is_proof_of_stake_height(2_250));
}

#[test]
fn genesis_blocks_check_out() {
    let registry = Registry::new().unwrap();
    for network in Network::ALL.iter() {
        let params = registry.get(*network);
        let genesis = params.genesis_block();
        assert_eq!(genesis.block_hash(), params.genesis_hash());
        assert!(genesis.check_merkle_root());
        assert!(genesis.header.prev_blockhash == Default::default());
        assert_eq!(genesis.header.bits, params.consensus().pow_limit_bits());
        assert_eq!(genesis.txdata.len(), 1);
        assert!(genesis.txdata[0].is_coin_base());
    }
}
