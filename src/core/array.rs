//! # Length-Prefixed Arrays
//!
//! Byte arrays framed as `[varint length][payload]`.
//!
//! ## Security
//! The declared length comes straight off the wire, so it is checked against
//! the source's remaining length (when known) and against the codec's
//! `max_safe_array_size` before a buffer of that size is allocated.

use crate::config::{CodecConfig, DEFAULT_MAX_SAFE_ARRAY_SIZE};
use crate::core::source::ByteSource;
use crate::core::varint::{read_var_int, write_var_int};
use crate::error::{CodecError, Result};
use bytes::BufMut;

/// Reader and writer for varint length-prefixed byte arrays.
///
/// The safety limit is a plain field, fixed when the codec is built. Build it
/// once from configuration and share it by value or reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamCodec {
    max_safe_array_size: usize,
}

impl Default for StreamCodec {
    fn default() -> Self {
        Self {
            max_safe_array_size: DEFAULT_MAX_SAFE_ARRAY_SIZE,
        }
    }
}

impl StreamCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_safe_array_size(max_safe_array_size: usize) -> Self {
        Self {
            max_safe_array_size,
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::with_max_safe_array_size(config.limits.max_safe_array_size)
    }

    pub fn max_safe_array_size(&self) -> usize {
        self.max_safe_array_size
    }

    /// Read a length-prefixed byte array.
    ///
    /// A declared length of zero or less (after signed reinterpretation)
    /// yields an empty vector and reads nothing past the prefix.
    ///
    /// # Errors
    /// - [`CodecError::StreamExhausted`] if the prefix or payload is cut short
    /// - [`CodecError::IntegerTooLarge`] if the prefix is not a valid varint
    /// - [`CodecError::TruncatedSource`] if the source knows it holds fewer
    ///   bytes than declared
    /// - [`CodecError::LengthExceedsSafetyLimit`] if the declared length is
    ///   above `max_safe_array_size`; raised before allocating
    pub fn read_array<S: ByteSource + ?Sized>(&self, source: &mut S) -> Result<Vec<u8>> {
        let declared = read_var_int(source)?;
        if declared <= 0 {
            return Ok(Vec::new());
        }
        let declared = declared as usize;

        if let Some(remaining) = source.remaining() {
            if declared > remaining {
                return Err(CodecError::TruncatedSource {
                    declared,
                    remaining,
                });
            }
        }

        self.check_length(declared)?;

        let mut buf = vec![0u8; declared];
        source.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Write `data` with its varint length prefix.
    ///
    /// # Errors
    /// Returns [`CodecError::LengthExceedsSafetyLimit`] when `data` is larger
    /// than this codec would accept on the read side. Nothing is written in
    /// that case.
    pub fn write_array<B: BufMut>(&self, buf: &mut B, data: &[u8]) -> Result<()> {
        self.check_length(data.len())?;
        let len = i32::try_from(data.len()).map_err(|_| CodecError::LengthExceedsSafetyLimit {
            length: data.len(),
            limit: i32::MAX as usize,
        })?;

        write_var_int(buf, len);
        buf.put_slice(data);
        Ok(())
    }

    /// Encode `data` into a fresh vector.
    pub fn encode_array(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len() + crate::core::varint::MAX_VARINT_LEN);
        self.write_array(&mut out, data)?;
        Ok(out)
    }

    #[inline]
    pub(crate) fn check_length(&self, length: usize) -> Result<()> {
        if length > self.max_safe_array_size {
            return Err(CodecError::LengthExceedsSafetyLimit {
                length,
                limit: self.max_safe_array_size,
            });
        }
        Ok(())
    }
}
