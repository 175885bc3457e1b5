//! # Varint Frame Codec
//!
//! Tokio codec for varint length-prefixed frames, for use with
//! `tokio_util::codec::{FramedRead, FramedWrite, Framed}`.
//!
//! ## Wire Format
//! ```text
//! [Length(varint, 1-5)] [Payload(Length)]
//! ```
//!
//! Incomplete prefixes and payloads are not errors here: the decoder returns
//! `Ok(None)` and waits for more bytes. A prefix announcing more than the
//! configured limit is rejected before any buffer space is reserved for it.

use crate::config::{CodecConfig, DEFAULT_MAX_SAFE_ARRAY_SIZE};
use crate::core::varint::{peek_var_uint, var_uint_len, write_var_int};
use crate::error::{CodecError, Result};
use crate::utils::metrics::CodecMetrics;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::sync::Arc;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{trace, warn};

#[derive(Debug, Clone)]
pub struct VarintFrameCodec {
    max_safe_array_size: usize,
    metrics: Option<Arc<CodecMetrics>>,
}

impl Default for VarintFrameCodec {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SAFE_ARRAY_SIZE)
    }
}

impl VarintFrameCodec {
    pub fn new(max_safe_array_size: usize) -> Self {
        Self {
            max_safe_array_size,
            metrics: None,
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.limits.max_safe_array_size)
    }

    /// Attach shared counters; clones of this codec report into the same set.
    pub fn with_metrics(mut self, metrics: Arc<CodecMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn max_safe_array_size(&self) -> usize {
        self.max_safe_array_size
    }

    fn reject_oversized(&self, length: usize) -> CodecError {
        warn!(
            length,
            limit = self.max_safe_array_size,
            "Rejected frame above safety limit"
        );
        if let Some(metrics) = &self.metrics {
            metrics.oversized();
        }
        CodecError::LengthExceedsSafetyLimit {
            length,
            limit: self.max_safe_array_size,
        }
    }

    fn encode_slice(&self, data: &[u8], dst: &mut BytesMut) -> Result<()> {
        if data.len() > self.max_safe_array_size {
            return Err(self.reject_oversized(data.len()));
        }
        let len = i32::try_from(data.len()).map_err(|_| self.reject_oversized(data.len()))?;

        dst.reserve(var_uint_len(len as u32) + data.len());
        write_var_int(dst, len);
        dst.put_slice(data);

        if let Some(metrics) = &self.metrics {
            metrics.frame_encoded(data.len() as u64);
        }
        Ok(())
    }
}

impl Decoder for VarintFrameCodec {
    type Item = Bytes;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>> {
        let (declared, prefix_len) = match peek_var_uint(&src[..]) {
            Ok(Some(prefix)) => prefix,
            Ok(None) => return Ok(None),
            Err(e) => {
                warn!(error = %e, "Malformed frame length prefix");
                if let Some(metrics) = &self.metrics {
                    metrics.malformed();
                }
                return Err(e);
            }
        };

        // Same signed reading as the stream reader: non-positive means empty
        let declared = declared as i32;
        if declared <= 0 {
            src.advance(prefix_len);
            if let Some(metrics) = &self.metrics {
                metrics.frame_decoded(0);
            }
            return Ok(Some(Bytes::new()));
        }
        let declared = declared as usize;

        if declared > self.max_safe_array_size {
            return Err(self.reject_oversized(declared));
        }

        let frame_len = prefix_len + declared;
        if src.len() < frame_len {
            trace!(have = src.len(), need = frame_len, "Waiting for frame payload");
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        src.advance(prefix_len);
        let payload = src.split_to(declared).freeze();
        if let Some(metrics) = &self.metrics {
            metrics.frame_decoded(payload.len() as u64);
        }
        Ok(Some(payload))
    }
}

impl Encoder<Bytes> for VarintFrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: Bytes, dst: &mut BytesMut) -> Result<()> {
        self.encode_slice(&item, dst)
    }
}

impl<'a> Encoder<&'a [u8]> for VarintFrameCodec {
    type Error = CodecError;

    fn encode(&mut self, item: &'a [u8], dst: &mut BytesMut) -> Result<()> {
        self.encode_slice(item, dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_partial_prefix_leaves_buffer_untouched() {
        let mut codec = VarintFrameCodec::default();
        let mut buf = BytesMut::from(&[0x80u8][..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 1);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_partial_payload_reserves_shortfall() {
        let mut codec = VarintFrameCodec::default();
        let mut buf = BytesMut::from(&[0x04u8, 1, 2][..]);
        assert!(codec.decode(&mut buf).unwrap().is_none());
        assert_eq!(buf.len(), 3);
        assert!(buf.capacity() >= 5);

        buf.extend_from_slice(&[3, 4]);
        let frame = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&frame[..], &[1, 2, 3, 4]);
        assert!(buf.is_empty());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_zero_length_frame() {
        let mut codec = VarintFrameCodec::default();
        let mut buf = BytesMut::from(&[0x00u8, 0x01, 0xEE][..]);
        let empty = codec.decode(&mut buf).unwrap().unwrap();
        assert!(empty.is_empty());
        let next = codec.decode(&mut buf).unwrap().unwrap();
        assert_eq!(&next[..], &[0xEE]);
    }

    #[test]
    #[traced_test]
    fn test_oversized_prefix_rejected_and_logged() {
        let metrics = Arc::new(CodecMetrics::new());
        let mut codec = VarintFrameCodec::new(100).with_metrics(metrics.clone());
        // 101, no payload yet
        let mut buf = BytesMut::from(&[0x65u8][..]);
        let capacity_before = buf.capacity();

        let result = codec.decode(&mut buf);
        assert!(matches!(
            result,
            Err(CodecError::LengthExceedsSafetyLimit {
                length: 101,
                limit: 100
            })
        ));
        assert_eq!(buf.capacity(), capacity_before);
        assert_eq!(metrics.snapshot().oversized_rejected, 1);
        assert!(logs_contain("Rejected frame above safety limit"));
    }

    #[test]
    fn test_malformed_prefix_counted() {
        let metrics = Arc::new(CodecMetrics::new());
        let mut codec = VarintFrameCodec::default().with_metrics(metrics.clone());
        let mut buf = BytesMut::from(&[0xFFu8; 5][..]);
        assert!(matches!(
            codec.decode(&mut buf),
            Err(CodecError::IntegerTooLarge)
        ));
        assert_eq!(metrics.snapshot().malformed_rejected, 1);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_encode_writes_prefix_and_payload() {
        let metrics = Arc::new(CodecMetrics::new());
        let mut codec = VarintFrameCodec::default().with_metrics(metrics.clone());
        let mut buf = BytesMut::new();
        codec.encode(Bytes::from_static(&[0u8; 200]), &mut buf).unwrap();

        assert_eq!(buf.len(), 2 + 200);
        assert_eq!(&buf[..2], &[0xC8, 0x01]);
        assert_eq!(metrics.snapshot().bytes_encoded, 200);
    }

    #[test]
    fn test_encode_refuses_oversized() {
        let mut codec = VarintFrameCodec::new(3);
        let mut buf = BytesMut::new();
        let result = codec.encode(&b"four"[..], &mut buf);
        assert!(matches!(
            result,
            Err(CodecError::LengthExceedsSafetyLimit { .. })
        ));
        assert!(buf.is_empty());
    }
}
