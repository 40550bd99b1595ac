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

//! Transactions
//!
//! A transaction describes a transfer of money. It consumes previously-unspent
//! transaction outputs and produces new ones, satisfying the condition to spend
//! the old outputs (typically a digital signature with a specific key must be
//! provided) and defining the condition to spend the new ones.
//!
//! Proof-of-stake transactions carry their own timestamp right after the
//! version field.
//!

use std::{fmt, io};

use hashes::Hash;

use crate::blockdata::script::Script;
use crate::consensus::encode::{self, Encodable};
use crate::hash_types::Txid;

/// A reference to a transaction output
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct OutPoint {
    /// The referenced transaction's txid
    pub txid: Txid,
    /// The index of the referenced output in its transaction's vout
    pub vout: u32,
}

impl OutPoint {
    /// Creates a "null" `OutPoint`.
    ///
    /// This value is used for coinbase transactions because they don't have
    /// any previous outputs.
    #[inline]
    pub fn null() -> OutPoint {
        OutPoint {
            txid: Default::default(),
            vout: u32::max_value(),
        }
    }

    /// Checks if an `OutPoint` is "null".
    #[inline]
    pub fn is_null(&self) -> bool {
        *self == OutPoint::null()
    }
}

impl Default for OutPoint {
    fn default() -> Self {
        OutPoint::null()
    }
}

/// A transaction input, which defines old coins to be consumed
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TxIn {
    /// The reference to the previous output that is being used an an input
    pub previous_output: OutPoint,
    /// The script which pushes values on the stack which will cause
    /// the referenced output's script to accept
    pub script_sig: Script,
    /// The sequence number, which suggests to miners which of two
    /// conflicting transactions should be preferred, or 0xFFFFFFFF
    /// to ignore this feature. This is generally never used since
    /// the miner behaviour cannot be enforced.
    pub sequence: u32,
}

impl Default for TxIn {
    fn default() -> TxIn {
        TxIn {
            previous_output: OutPoint::default(),
            script_sig: Script::new(),
            sequence: u32::max_value(),
        }
    }
}

/// A transaction output, which defines new coins to be created from old ones.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct TxOut {
    /// The value of the output, in satoshis
    pub value: i64,
    /// The script which must satisfy for the output to be spent
    pub script_pubkey: Script,
}

impl TxOut {
    /// An output with zero value and an empty script. Coinstake transactions
    /// mark their first output this way.
    pub fn empty() -> TxOut {
        TxOut {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    /// Whether this output is the empty marker output
    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

/// A proof-of-stake transaction
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Transaction {
    /// The protocol version, is currently expected to be 1.
    pub version: i32,
    /// Transaction timestamp, in seconds since the unix epoch
    pub time: u32,
    /// List of inputs
    pub input: Vec<TxIn>,
    /// List of outputs
    pub output: Vec<TxOut>,
    /// Block number before which this transaction is valid, or 0 for
    /// valid immediately.
    pub lock_time: u32,
}

impl Transaction {
    /// Computes the txid, the double SHA256 of the serialized transaction.
    pub fn txid(&self) -> Txid {
        let mut enc = Txid::engine();
        self.consensus_encode(&mut enc).expect("engines don't error");
        Txid::from_engine(enc)
    }

    /// Is this a coin base transaction?
    pub fn is_coin_base(&self) -> bool {
        self.input.len() == 1 && self.input[0].previous_output.is_null()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Transaction(txid={}, ver={}, time={}, vin.size={}, vout.size={}, lock_time={})",
            self.txid(),
            self.version,
            self.time,
            self.input.len(),
            self.output.len(),
            self.lock_time
        )?;
        for input in &self.input {
            write!(f, "\n    TxIn(prevout={}:{}, script_sig={:x})", input.previous_output.txid, input.previous_output.vout, input.script_sig)?;
        }
        for output in &self.output {
            write!(f, "\n    TxOut(value={}, script_pubkey={:x})", output.value, output.script_pubkey)?;
        }
        Ok(())
    }
}

impl Encodable for OutPoint {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let len = self.txid.consensus_encode(&mut s)?;
        Ok(len + self.vout.consensus_encode(s)?)
    }
}

impl Encodable for TxIn {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = 0;
        len += self.previous_output.consensus_encode(&mut s)?;
        len += self.script_sig.consensus_encode(&mut s)?;
        len += self.sequence.consensus_encode(s)?;
        Ok(len)
    }
}

impl Encodable for TxOut {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = 0;
        len += self.value.consensus_encode(&mut s)?;
        len += self.script_pubkey.consensus_encode(s)?;
        Ok(len)
    }
}

impl Encodable for Transaction {
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, encode::Error> {
        let mut len = 0;
        len += self.version.consensus_encode(&mut s)?;
        len += self.time.consensus_encode(&mut s)?;
        len += self.input.consensus_encode(&mut s)?;
        len += self.output.consensus_encode(&mut s)?;
        len += self.lock_time.consensus_encode(s)?;
        Ok(len)
    }
}

#[cfg(test)]
mod tests {
    use hex::decode as hex_decode;

    use super::{OutPoint, Transaction, TxIn, TxOut};
    use crate::blockdata::script::Builder;
    use crate::consensus::encode::serialize;

    fn coinbase_tx() -> Transaction {
        Transaction {
            version: 1,
            time: 1525191146,
            input: vec![TxIn {
                script_sig: Builder::new().push_int(0).push_int(42).push_slice(b"EMC").into_script(),
                ..Default::default()
            }],
            output: vec![TxOut::empty()],
            lock_time: 0,
        }
    }

    #[test]
    fn outpoint_null() {
        let null = OutPoint::null();
        assert!(null.is_null());
        assert_eq!(null.vout, 0xFFFFFFFF);
        assert_eq!(null, OutPoint::default());
        assert_eq!(serialize(&null)[32..], [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn empty_txout() {
        let out = TxOut::empty();
        assert!(out.is_empty());
        assert_eq!(serialize(&out), vec![0u8; 9]);
        assert!(!TxOut { value: 1, ..TxOut::empty() }.is_empty());
    }

    #[test]
    fn transaction_serialize() {
        let tx = coinbase_tx();
        assert!(tx.is_coin_base());
        let expected = hex_decode(concat!(
            "01000000", // version
            "ea91e85a", // time
            "01",       // input count
            "0000000000000000000000000000000000000000000000000000000000000000ffffffff",
            "07", "00012a03454d43", // script_sig
            "ffffffff", // sequence
            "01",       // output count
            "0000000000000000", "00",
            "00000000", // lock_time
        )).unwrap();
        assert_eq!(serialize(&tx), expected);
    }

    #[test]
    fn transaction_display() {
        let tx = coinbase_tx();
        let shown = tx.to_string();
        assert!(shown.starts_with(&format!("Transaction(txid={}, ver=1, time=1525191146", tx.txid())));
        assert!(shown.contains("script_sig=00012a03454d43"));
    }
}
