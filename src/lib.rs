//! # byte-stream-codec
//!
//! Compact binary framing and hex text helpers.
//!
//! - [`core::varint`]: 7-bit group (LEB128-style) 32-bit integers
//! - [`core::array::StreamCodec`]: varint length-prefixed byte arrays, with a
//!   maximum safe array size checked before allocation
//! - [`core::framing::VarintFrameCodec`]: the same framing as a Tokio codec
//! - [`utils::hex`]: uppercase hex encoding and forgiving hex decoding
//!
//! ## Example
//! ```rust
//! use byte_stream_codec::core::array::StreamCodec;
//! use byte_stream_codec::utils::hex::{from_hex, to_hex};
//!
//! let codec = StreamCodec::with_max_safe_array_size(1024);
//! let payload = from_hex("DE-AD be ef").unwrap();
//!
//! let framed = codec.encode_array(&payload).unwrap();
//! assert_eq!(to_hex(&framed), "04DEADBEEF");
//!
//! let mut input: &[u8] = &framed;
//! assert_eq!(codec.read_array(&mut input).unwrap(), payload);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::array::StreamCodec;
pub use crate::core::framing::VarintFrameCodec;
pub use crate::core::source::{ByteSource, ReaderSource};
pub use crate::error::{CodecError, Result};
