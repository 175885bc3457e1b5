#![no_main]

use byte_stream_codec::utils::hex::{from_hex, to_hex};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Encoding then decoding is lossless
    let text = to_hex(data);
    assert_eq!(from_hex(&text).ok().as_deref(), Some(data));

    // Arbitrary text only ever yields an error, never a panic
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = from_hex(text);
    }
});
