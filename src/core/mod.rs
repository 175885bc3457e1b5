//! # Core Codec Components
//!
//! Variable-length integers, length-prefixed arrays and frame codecs.
//!
//! ## Components
//! - **Source**: the `ByteSource` stream boundary and its adapters
//! - **Varint**: 7-bit group integer encoding
//! - **Array**: `StreamCodec`, length-prefixed byte arrays with a safety limit
//! - **Framing**: Tokio codec for varint-prefixed frames
//!
//! ## Wire Format
//! ```text
//! [Length(varint, 1-5)] [Payload(Length)]
//! ```
//!
//! ## Security
//! - Maximum array size: 1 MiB by default (prevents memory exhaustion)
//! - Length validation before allocation
//! - Varints longer than five bytes are rejected

pub mod array;
pub mod framing;
pub mod source;
pub mod varint;
