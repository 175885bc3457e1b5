//! Frame a few payloads, print the wire bytes as hex, and read them back.
//!
//! Run with: `cargo run --example hex_dump`

use byte_stream_codec::config::CodecConfig;
use byte_stream_codec::core::array::StreamCodec;
use byte_stream_codec::error::Result;
use byte_stream_codec::utils::hex::{from_hex, to_hex};
use byte_stream_codec::utils::logging::init_logging;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = CodecConfig::from_env()?;
    config.validate_strict()?;
    init_logging(&config.logging)?;

    let codec = StreamCodec::from_config(&config);
    let mut wire = Vec::new();
    for text in ["48-65-6C-6C-6F", "0x01, 0x02, 0x03", ""] {
        let payload = from_hex(text)?;
        codec.write_array(&mut wire, &payload)?;
    }
    info!(wire = %to_hex(&wire), "Encoded frames");

    let mut src: &[u8] = &wire;
    while !src.is_empty() {
        let array = codec.read_array(&mut src)?;
        info!(len = array.len(), hex = %to_hex(&array), "Decoded array");
    }

    // Announces 2 GiB with nothing behind it
    let mut hostile: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFF, 0x07];
    if let Err(e) = codec.read_array(&mut hostile) {
        warn!(error = %e, "Rejected hostile prefix");
    }

    Ok(())
}
