//! # Utility Modules
//!
//! Supporting utilities around the core codec.
//!
//! ## Components
//! - **Hex**: uppercase hex encoding and separator-tolerant decoding
//! - **Slice**: range copies out of byte buffers
//! - **Convert**: injectable lenient integer conversion
//! - **Logging**: `tracing-subscriber` setup from configuration
//! - **Metrics**: thread-safe counters for the frame codec

pub mod convert;
pub mod hex;
pub mod logging;
pub mod metrics;
pub mod slice;

pub use convert::{DefaultConverter, IntConverter, Value};
pub use metrics::CodecMetrics;
