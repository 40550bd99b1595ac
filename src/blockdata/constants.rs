// Rust Bitcoin Library
// Written in 2014 by
//     Andrew Poelstra <apoelstra@wpsoftware.net>
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

//! Blockdata constants
//!
//! This module provides various constants relating to the blockchain and
//! consensus code. In particular, it defines the genesis block and its
//! single transaction
//!

use rug::Integer;

use crate::blockdata::block::{Block, BlockHeader};
use crate::blockdata::script;
use crate::blockdata::transaction::{OutPoint, Transaction, TxIn, TxOut};
use crate::consensus::Params;
use crate::hash_types::TxMerkleNode;
use crate::network::constants::Network;

/// The maximum allowable sequence number
pub const MAX_SEQUENCE: u32 = 0xFFFFFFFF;

/// The message carried by the genesis coinbase input.
pub const GENESIS_MESSAGE: &str = "Carlo Calucci - Exclusive Masternode Coin (EMC) 01-05-2018";

/// Timestamp of the genesis coinbase transaction. It differs from the block
/// time; both are part of the hashed data.
pub const GENESIS_TX_TIME: u32 = 1525191146;

/// Constructs and returns the coinbase (and only) transaction of the genesis block
fn genesis_tx() -> Transaction {
    // Base
    let mut ret = Transaction {
        version: 1,
        time: GENESIS_TX_TIME,
        lock_time: 0,
        input: vec![],
        output: vec![],
    };

    // Inputs
    let in_script = script::Builder::new()
        .push_int(0)
        .push_bignum(&Integer::from(42))
        .push_slice(GENESIS_MESSAGE.as_bytes())
        .into_script();
    ret.input.push(TxIn {
        previous_output: OutPoint::null(),
        script_sig: in_script,
        sequence: MAX_SEQUENCE,
    });

    // Outputs
    ret.output.push(TxOut::empty());

    // end
    ret
}

/// Constructs and returns the genesis block
///
/// Testnet shares the main coinbase transaction and overrides the header
/// time, bits and nonce.
pub fn genesis_block(network: Network) -> Block {
    let txdata = vec![genesis_tx()];
    let merkle_root = TxMerkleNode::from_hash(txdata[0].txid().as_hash());

    let main = Block {
        header: BlockHeader {
            version: 1,
            prev_blockhash: Default::default(),
            merkle_root,
            time: 1525191130,
            bits: Params::new(Network::Main).pow_limit_bits(),
            nonce: 415077,
        },
        txdata,
    };

    match network {
        Network::Main => main,
        Network::Testnet => Block {
            header: BlockHeader {
                time: 1520638730,
                bits: Params::new(Network::Testnet).pow_limit_bits(),
                nonce: 353317,
                ..main.header
            },
            ..main
        },
    }
}

#[cfg(test)]
mod test {
    use hex::decode as hex_decode;

    use super::{genesis_block, genesis_tx, GENESIS_TX_TIME, MAX_SEQUENCE};
    use crate::consensus::encode::serialize;
    use crate::network::constants::Network;

    #[test]
    fn genesis_first_transaction() {
        let gen = genesis_tx();

        assert_eq!(gen.version, 1);
        assert_eq!(gen.time, GENESIS_TX_TIME);
        assert_eq!(gen.input.len(), 1);
        assert_eq!(gen.input[0].previous_output.txid, Default::default());
        assert_eq!(gen.input[0].previous_output.vout, 0xFFFFFFFF);
        assert_eq!(serialize(&gen.input[0].script_sig),
                   hex_decode("3e00012a3a4361726c6f2043616c75636369202d204578636c7573697665204d61737465726e6f646520436f696e2028454d43292030312d30352d32303138").unwrap());

        assert_eq!(gen.input[0].sequence, MAX_SEQUENCE);
        assert_eq!(gen.output.len(), 1);
        assert!(gen.output[0].is_empty());
        assert_eq!(gen.lock_time, 0);

        assert_eq!(format!("{:x}", gen.txid()),
                   "776bdfeece04e73693cf0f765e5fce6fcd231a630dd54d4b4647d3b0efdc6f6d".to_string());
    }

    #[test]
    fn main_genesis_full_block() {
        let gen = genesis_block(Network::Main);

        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, Default::default());
        assert_eq!(format!("{:x}", gen.header.merkle_root),
                   "776bdfeece04e73693cf0f765e5fce6fcd231a630dd54d4b4647d3b0efdc6f6d".to_string());
        assert!(gen.check_merkle_root());
        assert_eq!(gen.header.time, 1525191130);
        assert_eq!(gen.header.bits, 0x1f00ffff);
        assert_eq!(gen.header.nonce, 415077);
        assert_eq!(serialize(&gen.header),
                   hex_decode("0100000000000000000000000000000000000000000000000000000000000000000000006d6fdcefb0d347464b4dd50d631a23cd6fce5f5e760fcf9336e704ceeedf6b77da91e85affff001f65550600").unwrap());
        assert_eq!(
            format!("{:x}", gen.block_hash()),
            "4731439cc72689f6b3a847b450d6296c45e53b41be82f05be6b4cba9ec8e0e1c".to_string()
        );
    }

    #[test]
    fn testnet_genesis_full_block() {
        let main = genesis_block(Network::Main);
        let gen = genesis_block(Network::Testnet);

        assert_eq!(gen.header.version, 1);
        assert_eq!(gen.header.prev_blockhash, Default::default());
        assert_eq!(gen.header.merkle_root, main.header.merkle_root);
        assert_eq!(gen.txdata, main.txdata);
        assert_eq!(gen.header.time, 1520638730);
        assert_eq!(gen.header.bits, 0x1f00ffff);
        assert_eq!(gen.header.nonce, 353317);
        assert_eq!(
            format!("{:x}", gen.block_hash()),
            "7741797795d2a5529f2fb538135ddb6b4b89db0e4fad48bc6583b88aff210a9a".to_string()
        );
    }
}
