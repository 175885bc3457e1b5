//! Hexadecimal text encoding.
//!
//! Encoding always produces uppercase digits, two per byte, high nibble
//! first. Decoding accepts either case and first strips the separators that
//! show up in pasted hex dumps (`-`, `0x`, `0X`, spaces, line breaks, commas).

use crate::error::{CodecError, Result};

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Removed from decode input, in this order.
const SEPARATORS: [&str; 7] = ["-", "0x", "0X", " ", "\r", "\n", ","];

/// Encode all of `data`.
pub fn to_hex(data: &[u8]) -> String {
    to_hex_range(data, 0, None)
}

/// Encode `count` bytes of `data` starting at `offset`.
///
/// `None` encodes through the end of the buffer. A range running past the end
/// is clamped rather than rejected, so an offset beyond the buffer simply
/// yields an empty string.
pub fn to_hex_range(data: &[u8], offset: usize, count: Option<usize>) -> String {
    let start = offset.min(data.len());
    let available = data.len() - start;
    let count = count.map_or(available, |c| c.min(available));

    let mut out = String::with_capacity(count * 2);
    for &byte in &data[start..start + count] {
        push_byte_hex(&mut out, byte);
    }
    out
}

/// Encode a single byte as two characters.
#[inline]
pub fn byte_to_hex(byte: u8) -> String {
    let mut out = String::with_capacity(2);
    push_byte_hex(&mut out, byte);
    out
}

/// Append the two-character form of `byte` to `out`.
#[inline]
pub fn push_byte_hex(out: &mut String, byte: u8) {
    out.push(HEX_UPPER[(byte >> 4) as usize] as char);
    out.push(HEX_UPPER[(byte & 0x0F) as usize] as char);
}

/// Decode all of `text`.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    from_hex_range(text, 0, None)
}

/// Decode `length` characters of `text` starting at `start_index`.
///
/// Both positions refer to the text after separators are stripped. `None`
/// or `Some(0)` decodes through the end; a start index at or past the end
/// decodes nothing.
///
/// # Errors
/// - [`CodecError::OddLengthInput`] if the selected span has odd length
/// - [`CodecError::InvalidHexDigit`] if a pair is not two hex digits
pub fn from_hex_range(text: &str, start_index: usize, length: Option<usize>) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Ok(Vec::new());
    }

    let cleaned = strip_separators(text);
    let bytes = cleaned.as_bytes();
    if start_index >= bytes.len() {
        return Ok(Vec::new());
    }

    let available = bytes.len() - start_index;
    let length = match length {
        None | Some(0) => available,
        Some(n) => n.min(available),
    };
    if length % 2 != 0 {
        return Err(CodecError::OddLengthInput { length });
    }

    let span = &bytes[start_index..start_index + length];
    let mut out = Vec::with_capacity(length / 2);
    for (index, pair) in span.chunks_exact(2).enumerate() {
        match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => out.push((hi << 4) | lo),
            _ => {
                return Err(CodecError::InvalidHexDigit {
                    position: start_index + index * 2,
                    pair: String::from_utf8_lossy(pair).into_owned(),
                })
            }
        }
    }
    Ok(out)
}

fn strip_separators(text: &str) -> String {
    let mut cleaned = text.to_owned();
    for sep in SEPARATORS {
        if cleaned.contains(sep) {
            cleaned = cleaned.replace(sep, "");
        }
    }
    cleaned
}

#[inline]
fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
