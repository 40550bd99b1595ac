// Copyright (c) 2020 Chaintope Inc.
// Distributed under the MIT software license, see the accompanying
// file COPYING or http://www.opensource.org/licenses/mit-license.php.

//! Big number helpers
//!
//! Difficulty targets and script numbers use the encodings of the legacy
//! OpenSSL-backed big number type. These functions reproduce them on top of
//! `rug::Integer`.

use rug::integer::Order;
use rug::Integer;

/// The easiest allowed target: all 256 bits set, shifted right by `shift`.
pub fn pow_limit(shift: u32) -> Integer {
    ((Integer::from(1) << 256u32) - 1u32) >> shift
}

/// Encode `target` into the compact "nBits" form.
///
/// The top byte holds the size in bytes, the lower three bytes the most
/// significant digits. Bit 23 is a sign bit, so a mantissa that would set it
/// is shifted down one byte and the size bumped instead.
pub fn compact_from_target(target: &Integer) -> u32 {
    let abs = Integer::from(target.abs_ref());
    let mut size = (abs.significant_bits() + 7) / 8;
    let mut compact = if size <= 3 {
        abs.to_u32_wrapping() << (8 * (3 - size))
    } else {
        (abs >> (8 * (size - 3))).to_u32_wrapping()
    };

    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact |= size << 24;
    if *target < 0 {
        compact |= 0x0080_0000;
    }
    compact
}

/// Decode a compact "nBits" value into the full target.
pub fn target_from_compact(bits: u32) -> Integer {
    let size = bits >> 24;
    let word = bits & 0x007f_ffff;
    let target = if size <= 3 {
        Integer::from(word >> (8 * (3 - size)))
    } else {
        Integer::from(word) << (8 * (size - 3))
    };

    if bits & 0x0080_0000 != 0 && word != 0 {
        -target
    } else {
        target
    }
}

/// Minimal little-endian sign-magnitude encoding of `n`, as pushed into a
/// script. Zero encodes to an empty vector.
pub fn script_num_bytes(n: &Integer) -> Vec<u8> {
    if *n == 0 {
        return vec![];
    }

    let negative = *n < 0;
    let mut bytes = Integer::from(n.abs_ref()).to_digits::<u8>(Order::Lsf);
    let last = bytes.len() - 1;
    if bytes[last] & 0x80 != 0 {
        bytes.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        bytes[last] |= 0x80;
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow_limit_test() {
        let limit = pow_limit(16);
        assert_eq!(limit.significant_bits(), 240);
        assert_eq!(Integer::from(&limit + 1u32), Integer::from(1) << 240u32);
        assert_eq!(compact_from_target(&limit), 0x1f00ffff);
    }

    #[test]
    fn compact_roundtrip_test() {
        assert_eq!(target_from_compact(0x01003456), 0);
        assert_eq!(target_from_compact(0x01123456), 0x12);
        assert_eq!(compact_from_target(&Integer::from(0x12)), 0x01120000);
        assert_eq!(target_from_compact(0x02123456), 0x1234);
        assert_eq!(compact_from_target(&Integer::from(0x1234)), 0x02123400);
        assert_eq!(target_from_compact(0x05009234), 0x92340000u32);
        assert_eq!(compact_from_target(&Integer::from(0x92340000u32)), 0x05009234);
        assert_eq!(target_from_compact(0x04923456), -0x12345600);
        assert_eq!(compact_from_target(&Integer::from(-0x12345600)), 0x04923456);

        let bitcoin_limit = target_from_compact(0x1d00ffff);
        assert_eq!(bitcoin_limit, Integer::from(0xffff) << 208u32);
        assert_eq!(compact_from_target(&bitcoin_limit), 0x1d00ffff);
    }

    #[test]
    fn compact_is_lossy_but_never_exceeds_limit() {
        let limit = pow_limit(16);
        let decoded = target_from_compact(compact_from_target(&limit));
        assert!(decoded <= limit);
        assert_eq!(decoded, Integer::from(0xffff) << 224u32);
    }

    #[test]
    fn script_num_test() {
        assert_eq!(script_num_bytes(&Integer::from(0)), Vec::<u8>::new());
        assert_eq!(script_num_bytes(&Integer::from(42)), vec![0x2a]);
        assert_eq!(script_num_bytes(&Integer::from(127)), vec![0x7f]);
        assert_eq!(script_num_bytes(&Integer::from(128)), vec![0x80, 0x00]);
        assert_eq!(script_num_bytes(&Integer::from(255)), vec![0xff, 0x00]);
        assert_eq!(script_num_bytes(&Integer::from(256)), vec![0x00, 0x01]);
        assert_eq!(script_num_bytes(&Integer::from(-1)), vec![0x81]);
        assert_eq!(script_num_bytes(&Integer::from(-128)), vec![0x80, 0x80]);
        assert_eq!(script_num_bytes(&Integer::from(486604799)), vec![0xff, 0xff, 0x00, 0x1d]);
    }
}
