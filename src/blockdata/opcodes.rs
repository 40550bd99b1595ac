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

//! Opcodes
//!
//! Script opcodes needed to build coinbase inputs. Only the push family is
//! defined here; scripts are never executed by this library.
//!

/// A script Opcode
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct All {
    code: u8,
}

impl All {
    /// Encode as a byte
    #[inline]
    pub fn into_u8(self) -> u8 {
        self.code
    }
}

impl From<u8> for All {
    #[inline]
    fn from(b: u8) -> All {
        All { code: b }
    }
}

/// Named opcodes
pub mod all {
    use super::All;

    /// Push an empty array onto the stack
    pub const OP_PUSHBYTES_0: All = All { code: 0x00 };
    /// Read the next byte as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA1: All = All { code: 0x4c };
    /// Read the next 2 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA2: All = All { code: 0x4d };
    /// Read the next 4 bytes as N; push the next N bytes as an array onto the stack
    pub const OP_PUSHDATA4: All = All { code: 0x4e };
    /// Push the array [0x81] onto the stack
    pub const OP_PUSHNUM_NEG1: All = All { code: 0x4f };
    /// Push the array [0x01] onto the stack
    pub const OP_PUSHNUM_1: All = All { code: 0x51 };
    /// Push the array [0x10] onto the stack
    pub const OP_PUSHNUM_16: All = All { code: 0x60 };
}
