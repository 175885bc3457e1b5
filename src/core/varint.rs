//! # Variable-Length Integers
//!
//! Unsigned 32-bit integers packed into 7-bit groups, least significant group
//! first. Every byte carries seven payload bits; the high bit (`0x80`) marks
//! that another byte follows.
//!
//! ## Wire Format
//! ```text
//! 300 = 0b1_0010_1100  ->  [0xAC, 0x02]
//!        ^^^^^^^ low group 0x2C | 0x80, then 0x02
//! ```
//!
//! At most five bytes are accepted. A fifth byte that still has its
//! continuation bit set is rejected as [`CodecError::IntegerTooLarge`].

use crate::core::source::ByteSource;
use crate::error::{CodecError, Result};
use bytes::BufMut;

/// Longest encoding of a 32-bit value.
pub const MAX_VARINT_LEN: usize = 5;

const CONTINUATION_BIT: u8 = 0x80;
const PAYLOAD_MASK: u8 = 0x7F;

/// Decode a varint and return its bit pattern as `i32`.
///
/// The decoder accumulates into a `u32` and does not range-check against
/// `i32::MAX`: encodings of values at or above `0x8000_0000` come back
/// negative. Callers that want the unsigned value should use
/// [`read_var_uint`] or reinterpret with `as u32`.
#[inline]
pub fn read_var_int<S: ByteSource + ?Sized>(source: &mut S) -> Result<i32> {
    read_var_uint(source).map(|value| value as i32)
}

/// Decode a varint as an unsigned 32-bit value.
pub fn read_var_uint<S: ByteSource + ?Sized>(source: &mut S) -> Result<u32> {
    let mut result = 0u32;
    let mut shift = 0u32;

    loop {
        let byte = source.read_byte()?.ok_or(CodecError::StreamExhausted)?;
        // Bits pushed past 32 on the fifth group are dropped
        result |= u32::from(byte & PAYLOAD_MASK) << shift;

        if byte & CONTINUATION_BIT == 0 {
            return Ok(result);
        }

        shift += 7;
        if shift >= 32 {
            return Err(CodecError::IntegerTooLarge);
        }
    }
}

/// Decode a varint from the front of `buf` without consuming anything.
///
/// Returns `Ok(None)` when `buf` ends before the terminating byte, otherwise
/// the value together with the number of bytes it occupies.
pub fn peek_var_uint(buf: &[u8]) -> Result<Option<(u32, usize)>> {
    let mut result = 0u32;
    let mut shift = 0u32;

    for (index, &byte) in buf.iter().enumerate() {
        result |= u32::from(byte & PAYLOAD_MASK) << shift;

        if byte & CONTINUATION_BIT == 0 {
            return Ok(Some((result, index + 1)));
        }

        shift += 7;
        if shift >= 32 {
            return Err(CodecError::IntegerTooLarge);
        }
    }

    Ok(None)
}

/// Encode `value` as a varint. Negative values are written through their
/// `u32` bit pattern and always take five bytes.
#[inline]
pub fn write_var_int<B: BufMut>(buf: &mut B, value: i32) -> usize {
    write_var_uint(buf, value as u32)
}

/// Encode `value` as a varint and return the number of bytes written.
pub fn write_var_uint<B: BufMut>(buf: &mut B, mut value: u32) -> usize {
    let mut written = 0;
    loop {
        let mut byte = (value & u32::from(PAYLOAD_MASK)) as u8;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUATION_BIT;
        }
        buf.put_u8(byte);
        written += 1;
        if value == 0 {
            return written;
        }
    }
}

/// Number of bytes [`write_var_uint`] would emit for `value`.
#[inline]
pub fn var_uint_len(value: u32) -> usize {
    let bits = (32 - value.leading_zeros()).max(1) as usize;
    bits.div_ceil(7)
}

/// Encode into a fresh vector.
pub fn encode_var_int(value: i32) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_LEN);
    write_var_int(&mut out, value);
    out
}
