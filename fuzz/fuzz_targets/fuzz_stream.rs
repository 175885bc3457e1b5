#![no_main]

use byte_stream_codec::core::array::StreamCodec;
use byte_stream_codec::core::framing::VarintFrameCodec;
use byte_stream_codec::core::varint::read_var_int;
use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    // Arbitrary prefixes must never allocate past the limit or panic
    let codec = StreamCodec::with_max_safe_array_size(64 * 1024);
    let mut src: &[u8] = data;
    while !src.is_empty() {
        if codec.read_array(&mut src).is_err() {
            break;
        }
    }

    let mut src: &[u8] = data;
    let _ = read_var_int(&mut src);

    let mut frames = VarintFrameCodec::new(64 * 1024);
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_)) = frames.decode(&mut buf) {}
});
