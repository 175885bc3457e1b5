//! # Error Types
//!
//! Error handling for the byte stream codec.
//!
//! Every failure in this crate is reported synchronously to the immediate
//! caller as a [`CodecError`]. None of them is process-fatal: the caller
//! aborts the current decode and decides what to do next.
//!
//! ## Error Categories
//! - **Stream Errors**: the source ran out of bytes, or lied about its length
//! - **Integer Errors**: a varint that does not fit in 32 bits
//! - **Limit Errors**: a declared length above the configured safety limit
//! - **Text Errors**: malformed hexadecimal input
//! - **I/O and Config Errors**: wrapped reader failures and bad configuration
//!
//! ## Example Usage
//! ```rust
//! use byte_stream_codec::core::array::StreamCodec;
//! use byte_stream_codec::core::source::ReaderSource;
//! use byte_stream_codec::error::CodecError;
//! use tracing::{info, warn};
//!
//! let codec = StreamCodec::with_max_safe_array_size(100);
//! // Declares 101 bytes
//! let mut input = ReaderSource::new(&[0x65u8, 0xAA][..]);
//!
//! match codec.read_array(&mut input) {
//!     Ok(bytes) => info!(len = bytes.len(), "Decoded array"),
//!     Err(CodecError::LengthExceedsSafetyLimit { length, limit }) => {
//!         warn!(length, limit, "Rejected oversized array")
//!     }
//!     Err(e) => warn!(error = %e, "Decode failed"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

/// Static error messages shared between error variants and validation output.
pub mod constants {
    pub const ERR_STREAM_EXHAUSTED: &str = "Stream ended before the value was complete";
    pub const ERR_INTEGER_TOO_LARGE: &str = "Variable-length integer exceeds 32 bits";

    /// Configuration messages
    pub const ERR_LIMIT_ZERO: &str = "Max safe array size must be greater than 0";
    pub const ERR_LIMIT_TOO_LARGE: &str = "Max safe array size cannot exceed i32::MAX";
    pub const ERR_APP_NAME_EMPTY: &str = "Application name cannot be empty";
    pub const ERR_NO_LOG_OUTPUT: &str = "At least one logging output must be enabled";
}

// CodecError is the single error type for all codec operations
#[derive(Error, Debug, Serialize, Deserialize)]
pub enum CodecError {
    #[error("Stream ended before the value was complete")]
    StreamExhausted,

    #[error("Variable-length integer exceeds 32 bits")]
    IntegerTooLarge,

    #[error("Declared length {declared} exceeds the {remaining} bytes remaining in the source")]
    TruncatedSource { declared: usize, remaining: usize },

    #[error("Declared length {length} exceeds the safety limit of {limit} bytes")]
    LengthExceedsSafetyLimit { length: usize, limit: usize },

    #[error("Invalid hex digit pair '{pair}' at position {position}")]
    InvalidHexDigit { position: usize, pair: String },

    #[error("Hex input has odd length {length}")]
    OddLengthInput { length: usize },

    #[error("Range {offset}+{count} is outside a buffer of {len} bytes")]
    OutOfRange {
        offset: usize,
        count: usize,
        len: usize,
    },

    #[error("I/O error: {0}")]
    #[serde(skip_serializing, skip_deserializing)]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl CodecError {
    /// True for conditions caused by corrupt or hostile input, where retrying
    /// the same bytes can never succeed.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            CodecError::IntegerTooLarge
                | CodecError::TruncatedSource { .. }
                | CodecError::LengthExceedsSafetyLimit { .. }
                | CodecError::InvalidHexDigit { .. }
                | CodecError::OddLengthInput { .. }
        )
    }
}

/// Type alias for Results using CodecError
pub type Result<T> = std::result::Result<T, CodecError>;
