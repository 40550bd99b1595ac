// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Selecting testnet from the startup flag fixes the process-wide parameters.

use emc_chainparams::{params, select_params, select_params_from_flag, selected_network, Base58Type, Error, Network};

#[test]
fn testnet_flag_selects_once() {
    let selected = select_params_from_flag(true).unwrap();
    assert_eq!(selected.network(), Network::Testnet);
    assert_eq!(selected.message_start(), [0xc4, 0xd5, 0xa6, 0xb8]);
    assert_eq!(selected.base58_prefix(Base58Type::PubkeyAddress), &[85]);
    assert_eq!(selected_network(), Some(Network::Testnet));

    // Readers see the selection instead of the main default.
    assert!(std::ptr::eq(params(), selected));

    // Repeating the selection is harmless, switching is refused.
    assert!(std::ptr::eq(select_params_from_flag(true).unwrap(), selected));
    assert!(std::ptr::eq(select_params(Network::Testnet).unwrap(), selected));

    let err = select_params_from_flag(false).unwrap_err();
    assert_eq!(err, Error::AlreadySelected { selected: Network::Testnet, requested: Network::Main });
    assert!(!err.is_fatal());
    assert_eq!(params().network(), Network::Testnet);
}
