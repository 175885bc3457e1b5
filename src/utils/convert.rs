//! # Integer Conversion Policies
//!
//! Lenient "convert or fall back to a default" integer conversion.
//!
//! The conversion rules are a strategy object rather than a process-wide
//! setting: call sites take an `&dyn IntConverter` (or a generic) and the
//! application decides which implementation to hand them. Swapping the
//! algorithm means passing a different converter, not mutating shared state.
//!
//! ## Usage
//! ```rust
//! use byte_stream_codec::utils::convert::{DefaultConverter, IntConverter, Value};
//!
//! let converter = DefaultConverter;
//! assert_eq!(converter.to_int(&Value::Str("1,024"), 0), 1024);
//! assert_eq!(converter.to_int(&Value::Str("n/a"), -1), -1);
//! assert_eq!(converter.to_int(&Value::Bytes(&[0x34, 0x12]), 0), 0x1234);
//! ```

/// Input accepted by an [`IntConverter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Null,
    Int(i32),
    Long(i64),
    Float(f64),
    Bool(bool),
    Str(&'a str),
    /// Form-style multi-value input; the first non-empty entry wins.
    StrList(&'a [&'a str]),
    /// Little-endian integer bytes.
    Bytes(&'a [u8]),
}

/// Strategy for turning loosely typed values into `i32`.
pub trait IntConverter {
    /// Convert `value`, returning `default_value` when it cannot be represented.
    fn to_int(&self, value: &Value<'_>, default_value: i32) -> i32;
}

impl<C: IntConverter + ?Sized> IntConverter for &C {
    fn to_int(&self, value: &Value<'_>, default_value: i32) -> i32 {
        (**self).to_int(value, default_value)
    }
}

impl<C: IntConverter + ?Sized> IntConverter for Box<C> {
    fn to_int(&self, value: &Value<'_>, default_value: i32) -> i32 {
        (**self).to_int(value, default_value)
    }
}

/// The stock conversion rules.
///
/// - strings: thousands separators (`,`) removed, full-width forms folded to
///   ASCII, surrounding whitespace trimmed, then parsed
/// - byte slices of 1 to 4 bytes: little-endian; two bytes are read as a
///   signed `i16`, three are zero-extended
/// - floats: rounded half-to-even when finite and in range
/// - booleans: `1` / `0`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultConverter;

impl IntConverter for DefaultConverter {
    fn to_int(&self, value: &Value<'_>, default_value: i32) -> i32 {
        match *value {
            Value::Int(n) => n,
            Value::Null => default_value,
            Value::Long(n) => i32::try_from(n).unwrap_or(default_value),
            Value::Float(f) => float_to_int(f).unwrap_or(default_value),
            Value::Bool(b) => i32::from(b),
            Value::Str(s) => parse_str(s).unwrap_or(default_value),
            Value::StrList(list) => match list.iter().find(|s| !s.is_empty()) {
                Some(s) => parse_str(s).unwrap_or(default_value),
                None => default_value,
            },
            Value::Bytes(buf) => bytes_to_int(buf).unwrap_or(default_value),
        }
    }
}

fn parse_str(s: &str) -> Option<i32> {
    let folded = to_half_width(&s.replace(',', ""));
    let trimmed = folded.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Fold full-width ASCII variants (U+FF01..U+FF5E) and the ideographic space.
pub fn to_half_width(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
            _ => c,
        })
        .collect()
}

fn bytes_to_int(buf: &[u8]) -> Option<i32> {
    match *buf {
        [b0] => Some(i32::from(b0)),
        [b0, b1] => Some(i32::from(i16::from_le_bytes([b0, b1]))),
        [b0, b1, b2] => Some(i32::from_le_bytes([b0, b1, b2, 0])),
        [b0, b1, b2, b3] => Some(i32::from_le_bytes([b0, b1, b2, b3])),
        _ => None,
    }
}

fn float_to_int(f: f64) -> Option<i32> {
    if !f.is_finite() {
        return None;
    }
    let rounded = f.round_ties_even();
    if rounded < f64::from(i32::MIN) || rounded > f64::from(i32::MAX) {
        return None;
    }
    Some(rounded as i32)
}
