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

//! Consensus-encodable types
//!
//! This is basically a replacement of the `Encodable` trait which does
//! normalization for endianness, etc., to ensure that the encoding
//! matches for endianness, etc. It covers the subset of the legacy wire
//! format needed to hash blocks and transactions: little-endian integers,
//! compact-size integers, byte vectors and lists.
//!

use std::io;

use hashes::hex::ToHex;

/// Encoding error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// And I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Encode an object into a vector
pub fn serialize<T: Encodable + ?Sized>(data: &T) -> Vec<u8> {
    let mut encoder = Vec::new();
    let len = data
        .consensus_encode(&mut encoder)
        .expect("in-memory writers don't error");
    debug_assert_eq!(len, encoder.len());
    encoder
}

/// Encode an object into a hex-encoded string
pub fn serialize_hex<T: Encodable + ?Sized>(data: &T) -> String {
    serialize(data)[..].to_hex()
}

/// Data which can be encoded in a consensus-consistent way
pub trait Encodable {
    /// Encode an object with a well-defined format, should only ever error if
    /// the underlying `Write` errors. Returns the number of bytes written on
    /// success
    fn consensus_encode<W: io::Write>(&self, e: W) -> Result<usize, Error>;
}

/// A variable-length unsigned integer
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub struct VarInt(pub u64);

impl VarInt {
    /// Gets the length of this VarInt when encoded.
    /// Returns 1 for 0..=0xFC, 3 for 0xFD..=(2^16-1), 5 for 0x10000..=(2^32-1),
    /// and 9 otherwise.
    #[inline]
    pub fn len(&self) -> usize {
        match self.0 {
            0..=0xFC => 1,
            0xFD..=0xFFFF => 3,
            0x10000..=0xFFFFFFFF => 5,
            _ => 9,
        }
    }
}

macro_rules! impl_int_encodable {
    ($ty:ident) => {
        impl Encodable for $ty {
            #[inline]
            fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
                s.write_all(&self.to_le_bytes())?;
                Ok(::std::mem::size_of::<$ty>())
            }
        }
    };
}

impl_int_encodable!(u8);
impl_int_encodable!(u16);
impl_int_encodable!(u32);
impl_int_encodable!(u64);
impl_int_encodable!(i32);
impl_int_encodable!(i64);

impl Encodable for VarInt {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
        match self.0 {
            0..=0xFC => {
                (self.0 as u8).consensus_encode(s)?;
                Ok(1)
            }
            0xFD..=0xFFFF => {
                s.write_all(&[0xFD])?;
                (self.0 as u16).consensus_encode(s)?;
                Ok(3)
            }
            0x10000..=0xFFFFFFFF => {
                s.write_all(&[0xFE])?;
                (self.0 as u32).consensus_encode(s)?;
                Ok(5)
            }
            _ => {
                s.write_all(&[0xFF])?;
                (self.0 as u64).consensus_encode(s)?;
                Ok(9)
            }
        }
    }
}

impl Encodable for [u8; 4] {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
        s.write_all(&self[..])?;
        Ok(self.len())
    }
}

impl Encodable for [u8; 32] {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
        s.write_all(&self[..])?;
        Ok(self.len())
    }
}

/// Byte strings are prefixed with their length as a `VarInt`.
impl Encodable for [u8] {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
        let vi_len = VarInt(self.len() as u64).consensus_encode(&mut s)?;
        s.write_all(self)?;
        Ok(vi_len + self.len())
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    #[inline]
    fn consensus_encode<S: io::Write>(&self, mut s: S) -> Result<usize, Error> {
        let mut len = VarInt(self.len() as u64).consensus_encode(&mut s)?;
        for c in self.iter() {
            len += c.consensus_encode(&mut s)?;
        }
        Ok(len)
    }
}
