// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! File defines types for hashes used throughout the library. These types are needed in order
//! to avoid mixing data of the same hash format (like SHA256d) but of different meaning
//! (transaction id, block hash etc).

use std::io;

use hashes::{sha256d, Hash};

use crate::consensus::encode::{self, Encodable};

macro_rules! impl_hashencode {
    ($hashtype:ident) => {
        impl Encodable for $hashtype {
            fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, encode::Error> {
                self.into_inner().consensus_encode(s)
            }
        }
    };
}

hash_newtype!(Txid, sha256d::Hash, 32, doc="A transaction hash/transaction ID.");
hash_newtype!(BlockHash, sha256d::Hash, 32, doc="A block hash.");
hash_newtype!(TxMerkleNode, sha256d::Hash, 32, doc="A hash of the Merkle tree branch or root for transactions");

impl_hashencode!(Txid);
impl_hashencode!(BlockHash);
impl_hashencode!(TxMerkleNode);
