// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! The process-wide parameters default to main when nothing was selected.

use emc_chainparams::{params, select_params, selected_network, Error, Network};

#[test]
fn params_default_to_main() {
    assert_eq!(selected_network(), None);

    let current = params();
    assert_eq!(current.network(), Network::Main);
    assert_eq!(current.default_port(), 21507);
    assert_eq!(selected_network(), Some(Network::Main));

    // The implicit default is a real selection.
    let again = select_params(Network::Main).unwrap();
    assert!(std::ptr::eq(current, again));
    assert_eq!(
        select_params(Network::Testnet).unwrap_err(),
        Error::AlreadySelected { selected: Network::Main, requested: Network::Testnet }
    );
    assert_eq!(params().network(), Network::Main);
}
