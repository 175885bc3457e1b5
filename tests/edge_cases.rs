#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the stream codec and hex helpers
//! Tests boundary conditions, malformed input and the allocation guard

use byte_stream_codec::config::{CodecConfig, DEFAULT_MAX_SAFE_ARRAY_SIZE};
use byte_stream_codec::core::array::StreamCodec;
use byte_stream_codec::core::source::{ByteSource, ReaderSource};
use byte_stream_codec::core::varint::{encode_var_int, read_var_int};
use byte_stream_codec::error::{CodecError, Result};
use byte_stream_codec::utils::hex::{byte_to_hex, from_hex, to_hex};
use byte_stream_codec::utils::slice::read_bytes;
use std::io::Cursor;

// ============================================================================
// VARINT EDGE CASES
// ============================================================================

#[test]
fn test_varint_zero_is_one_byte() {
    assert_eq!(encode_var_int(0), vec![0x00]);
}

#[test]
fn test_varint_five_continuation_bytes_rejected() {
    let mut src: &[u8] = &[0x81, 0x82, 0x83, 0x84, 0x85];
    assert!(matches!(
        read_var_int(&mut src),
        Err(CodecError::IntegerTooLarge)
    ));
}

#[test]
fn test_varint_max_unsigned_decodes_to_minus_one() {
    let mut src: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0x0F];
    assert_eq!(read_var_int(&mut src).unwrap(), -1);
    assert!(matches!(
        read_var_int(&mut src),
        Err(CodecError::StreamExhausted)
    ));
}

// ============================================================================
// ARRAY EDGE CASES
// ============================================================================

/// Source that records the largest buffer it was asked to fill.
struct RecordingSource<'a> {
    data: &'a [u8],
    largest_request: usize,
}

impl ByteSource for RecordingSource<'_> {
    fn read_byte(&mut self) -> Result<Option<u8>> {
        self.data.read_byte()
    }

    fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        self.largest_request = self.largest_request.max(buf.len());
        self.data.read_exact(buf)
    }
}

#[test]
fn test_limit_rejection_happens_before_reading_payload() {
    let codec = StreamCodec::with_max_safe_array_size(100);
    let mut bytes = encode_var_int(101);
    bytes.extend_from_slice(&[0xAB; 101]);

    let mut src = RecordingSource {
        data: &bytes,
        largest_request: 0,
    };
    let result = codec.read_array(&mut src);

    assert!(matches!(
        result,
        Err(CodecError::LengthExceedsSafetyLimit {
            length: 101,
            limit: 100
        })
    ));
    assert_eq!(src.largest_request, 0, "no payload buffer should be filled");
}

#[test]
fn test_limit_boundary_is_inclusive() {
    let codec = StreamCodec::with_max_safe_array_size(100);
    let framed = codec.encode_array(&[7u8; 100]).unwrap();
    let mut src: &[u8] = &framed;
    assert_eq!(codec.read_array(&mut src).unwrap().len(), 100);
}

#[test]
fn test_huge_declared_length_rejected_without_allocating() {
    // Would be a 2 GiB allocation if the guard were missing
    let codec = StreamCodec::new();
    let bytes = encode_var_int(i32::MAX);
    let mut src = ReaderSource::new(&bytes[..]);

    match codec.read_array(&mut src) {
        Err(CodecError::LengthExceedsSafetyLimit { length, limit }) => {
            assert_eq!(length, i32::MAX as usize);
            assert_eq!(limit, DEFAULT_MAX_SAFE_ARRAY_SIZE);
        }
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_truncated_source_takes_precedence_over_limit() {
    let codec = StreamCodec::with_max_safe_array_size(10);
    let mut bytes = encode_var_int(50);
    bytes.extend_from_slice(&[0u8; 5]);
    let mut cursor = Cursor::new(bytes);

    assert!(matches!(
        codec.read_array(&mut cursor),
        Err(CodecError::TruncatedSource {
            declared: 50,
            remaining: 5
        })
    ));
}

#[test]
fn test_zero_length_array_consumes_exactly_one_byte() {
    let codec = StreamCodec::new();
    let mut cursor = Cursor::new(vec![0x00, 0x03, 1, 2, 3]);
    assert!(codec.read_array(&mut cursor).unwrap().is_empty());
    assert_eq!(cursor.position(), 1);
    assert_eq!(codec.read_array(&mut cursor).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_codecs_with_different_limits_coexist() {
    let strict = StreamCodec::with_max_safe_array_size(2);
    let relaxed = StreamCodec::from_config(&CodecConfig::default());
    let framed = relaxed.encode_array(&[1, 2, 3]).unwrap();

    let mut a: &[u8] = &framed;
    let mut b: &[u8] = &framed;
    assert!(strict.read_array(&mut a).is_err());
    assert_eq!(relaxed.read_array(&mut b).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_reader_source_over_file_like_stream() {
    let codec = StreamCodec::new();
    let framed = codec.encode_array(b"payload").unwrap();
    let mut src = ReaderSource::new(std::io::BufReader::new(&framed[..]));
    assert_eq!(codec.read_array(&mut src).unwrap(), b"payload");
}

// ============================================================================
// HEX EDGE CASES
// ============================================================================

#[test]
fn test_hex_single_byte_hot_path() {
    assert_eq!(byte_to_hex(0xFF), "FF");
    assert_eq!(byte_to_hex(0x0A), "0A");
}

#[test]
fn test_hex_pasted_dump() {
    assert_eq!(
        from_hex("AB-CD 0x12,34").unwrap(),
        from_hex("ABCD1234").unwrap()
    );
    assert_eq!(from_hex("ABCD1234").unwrap(), vec![0xAB, 0xCD, 0x12, 0x34]);
}

#[test]
fn test_hex_odd_length_and_bad_digit_are_distinct() {
    let odd = from_hex("ABC").unwrap_err();
    let bad = from_hex("ABCG").unwrap_err();
    assert!(matches!(odd, CodecError::OddLengthInput { length: 3 }));
    assert!(matches!(bad, CodecError::InvalidHexDigit { position: 2, .. }));
    assert!(odd.is_malformed_input() && bad.is_malformed_input());
}

#[test]
fn test_hex_of_framed_array() {
    let codec = StreamCodec::new();
    let framed = codec.encode_array(&[0xCA, 0xFE]).unwrap();
    assert_eq!(to_hex(&framed), "02CAFE");
}

// ============================================================================
// RANGE COPY
// ============================================================================

#[test]
fn test_read_bytes_always_copies() {
    let data = vec![1u8, 2, 3];
    let copy = read_bytes(&data, 0, None).unwrap();
    assert_eq!(copy, data);
    assert_ne!(copy.as_ptr(), data.as_ptr());
}
