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

//! Blocks
//!
//! A block is a bundle of transactions with a proof-of-work attached,
//! which commits to an earlier block to form the blockchain. This
//! module describes structures and functions needed to describe
//! these blocks and the blockchain.
//!

use std::io;

use hashes::{sha256d, Hash, HashEngine};

use crate::blockdata::transaction::Transaction;
use crate::consensus::encode::{self, Encodable};
use crate::hash_types::{BlockHash, TxMerkleNode};

/// A block header, which contains all the block's information except
/// the actual transactions
#[derive(Copy, PartialEq, Eq, Clone, Debug)]
pub struct BlockHeader {
    /// The protocol version. Should always be 1.
    pub version: i32,
    /// Reference to the previous block in the chain
    pub prev_blockhash: BlockHash,
    /// The root hash of the merkle tree of transactions in the block
    pub merkle_root: TxMerkleNode,
    /// The timestamp of the block, as claimed by the miner
    pub time: u32,
    /// The target value below which the blockhash must lie, encoded as a
    /// a float (with well-defined rounding, of course)
    pub bits: u32,
    /// The nonce, selected to obtain a low enough blockhash
    pub nonce: u32,
}

impl BlockHeader {
    /// The number of bytes a serialized header occupies.
    pub const SIZE: usize = 4 + 32 + 32 + 4 + 4 + 4; // 80

    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        let mut engine = BlockHash::engine();
        self.consensus_encode(&mut engine).expect("engines don't error");
        BlockHash::from_engine(engine)
    }
}

impl Encodable for BlockHeader {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(&mut s)?;
        len += self.prev_blockhash.consensus_encode(&mut s)?;
        len += self.merkle_root.consensus_encode(&mut s)?;
        len += self.time.consensus_encode(&mut s)?;
        len += self.bits.consensus_encode(&mut s)?;
        len += self.nonce.consensus_encode(s)?;
        Ok(len)
    }
}

/// A block, a header plus the list of transactions it commits to
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Block {
    /// The block header
    pub header: BlockHeader,
    /// List of transactions contained in the block
    pub txdata: Vec<Transaction>,
}

impl Block {
    /// Returns the block hash.
    pub fn block_hash(&self) -> BlockHash {
        self.header.block_hash()
    }

    /// Computes the merkle root of the transactions in this block.
    ///
    /// Returns `None` for a block without transactions.
    pub fn compute_merkle_root(&self) -> Option<TxMerkleNode> {
        let hashes = self.txdata.iter().map(|tx| tx.txid().as_hash());
        merkle_root(hashes).map(TxMerkleNode::from_hash)
    }

    /// Checks if merkle root of header matches merkle root of the transaction list.
    pub fn check_merkle_root(&self) -> bool {
        match self.compute_merkle_root() {
            Some(merkle_root) => self.header.merkle_root == merkle_root,
            None => false,
        }
    }
}

/// Calculates the merkle root of a list of hashes.
///
/// Pairs are concatenated and double-SHA256 hashed level by level. A level
/// with an odd number of nodes pairs the last node with itself.
pub fn merkle_root<I>(hashes: I) -> Option<sha256d::Hash>
where
    I: Iterator<Item = sha256d::Hash>,
{
    let mut level: Vec<sha256d::Hash> = hashes.collect();
    if level.is_empty() {
        return None;
    }

    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = pair[0];
                let right = pair.get(1).copied().unwrap_or(left);
                let mut engine = sha256d::Hash::engine();
                engine.input(&left[..]);
                engine.input(&right[..]);
                sha256d::Hash::from_engine(engine)
            })
            .collect();
    }
    Some(level[0])
}

#[cfg(test)]
mod tests {
    use hashes::{sha256d, Hash, HashEngine};

    use super::{merkle_root, BlockHeader};
    use crate::consensus::encode::serialize;

    #[test]
    fn header_size() {
        let header = BlockHeader {
            version: 1,
            prev_blockhash: Default::default(),
            merkle_root: Default::default(),
            time: 0,
            bits: 0x1f00ffff,
            nonce: 0,
        };
        let bytes = serialize(&header);
        assert_eq!(bytes.len(), BlockHeader::SIZE);
        assert_eq!(&bytes[72..76], &[0xff, 0xff, 0x00, 0x1f]);
    }

    #[test]
    fn merkle_root_single_and_empty() {
        assert_eq!(merkle_root(Vec::new().into_iter()), None);

        let leaf = sha256d::Hash::hash(b"leaf");
        assert_eq!(merkle_root(vec![leaf].into_iter()), Some(leaf));
    }

    #[test]
    fn merkle_root_odd_level_duplicates_last() {
        let a = sha256d::Hash::hash(b"a");
        let b = sha256d::Hash::hash(b"b");
        let c = sha256d::Hash::hash(b"c");

        let join = |l: sha256d::Hash, r: sha256d::Hash| {
            let mut engine = sha256d::Hash::engine();
            engine.input(&l[..]);
            engine.input(&r[..]);
            sha256d::Hash::from_engine(engine)
        };
        let expected = join(join(a, b), join(c, c));
        assert_eq!(merkle_root(vec![a, b, c].into_iter()), Some(expected));
    }
}
