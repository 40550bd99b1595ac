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

//! Script
//!
//! Scripts define the spending conditions of outputs and carry arbitrary data
//! in coinbase inputs. This library only assembles them; it never runs them.
//!

use std::{fmt, io};

use hashes::hex::ToHex;
use rug::Integer;

use crate::blockdata::opcodes;
use crate::consensus::encode::{self, Encodable};
use crate::util::bignum;

#[derive(Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
/// A script
pub struct Script(Box<[u8]>);

impl AsRef<[u8]> for Script {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Script({})", self.0.to_hex())
    }
}

impl fmt::LowerHex for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

impl From<Vec<u8>> for Script {
    fn from(v: Vec<u8>) -> Script {
        Script(v.into_boxed_slice())
    }
}

impl Script {
    /// Creates a new empty script
    pub fn new() -> Script {
        Script(vec![].into_boxed_slice())
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the script data
    pub fn as_bytes(&self) -> &[u8] {
        &*self.0
    }
}

impl Encodable for Script {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, s: S) -> Result<usize, encode::Error> {
        self.0[..].consensus_encode(s)
    }
}

/// An object which can be used to construct a script piece by piece
#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct Builder(Vec<u8>);

impl Builder {
    /// Creates a new empty script
    pub fn new() -> Self {
        Builder(vec![])
    }

    /// The length in bytes of the script
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the script is the empty script
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds instructions to push an integer onto the stack. Integers are
    /// encoded as little-endian signed-magnitude numbers, but there are
    /// dedicated opcodes to push some small integers.
    pub fn push_int(self, data: i64) -> Builder {
        if data == -1 {
            self.push_opcode(opcodes::all::OP_PUSHNUM_NEG1)
        } else if data == 0 {
            self.push_opcode(opcodes::all::OP_PUSHBYTES_0)
        } else if data >= 1 && data <= 16 {
            let code = opcodes::all::OP_PUSHNUM_1.into_u8() + (data as u8 - 1);
            self.push_opcode(opcodes::All::from(code))
        } else {
            self.push_bignum(&Integer::from(data))
        }
    }

    /// Adds instructions to push a big integer onto the stack, using the
    /// minimal signed-magnitude encoding. Zero pushes an empty array.
    pub fn push_bignum(self, data: &Integer) -> Builder {
        self.push_slice(&bignum::script_num_bytes(data))
    }

    /// Adds instructions to push some arbitrary data onto the stack
    pub fn push_slice(mut self, data: &[u8]) -> Builder {
        // Start with a PUSH opcode
        match data.len() as u64 {
            n if n < opcodes::all::OP_PUSHDATA1.into_u8() as u64 => {
                self.0.push(n as u8);
            }
            n if n < 0x100 => {
                self.0.push(opcodes::all::OP_PUSHDATA1.into_u8());
                self.0.push(n as u8);
            }
            n if n < 0x10000 => {
                self.0.push(opcodes::all::OP_PUSHDATA2.into_u8());
                self.0.extend_from_slice(&(n as u16).to_le_bytes());
            }
            n if n < 0x100000000 => {
                self.0.push(opcodes::all::OP_PUSHDATA4.into_u8());
                self.0.extend_from_slice(&(n as u32).to_le_bytes());
            }
            _ => panic!("tried to put a 4bn+ sized object into a script!"),
        }
        // Then push the raw bytes
        self.0.extend_from_slice(data);
        self
    }

    /// Adds a single opcode to the script
    pub fn push_opcode(mut self, data: opcodes::All) -> Builder {
        self.0.push(data.into_u8());
        self
    }

    /// Converts the `Builder` into an unmodifiable `Script`
    pub fn into_script(self) -> Script {
        Script(self.0.into_boxed_slice())
    }
}
