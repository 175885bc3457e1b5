//! Observability and Metrics
//!
//! Counters for the framing codec, shared between the read and write halves
//! of a connection through an `Arc`.
//!
//! Uses atomic counters for thread-safe metrics collection.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::info;

/// Metrics collector for frame encode/decode operations
#[derive(Debug)]
pub struct CodecMetrics {
    /// Frames successfully decoded
    pub frames_decoded: AtomicU64,
    /// Frames successfully encoded
    pub frames_encoded: AtomicU64,
    /// Payload bytes decoded
    pub bytes_decoded: AtomicU64,
    /// Payload bytes encoded
    pub bytes_encoded: AtomicU64,
    /// Frames rejected by the safety limit
    pub oversized_rejected: AtomicU64,
    /// Frames rejected for a malformed length prefix
    pub malformed_rejected: AtomicU64,
    start_time: Instant,
}

impl CodecMetrics {
    pub fn new() -> Self {
        Self {
            frames_decoded: AtomicU64::new(0),
            frames_encoded: AtomicU64::new(0),
            bytes_decoded: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            oversized_rejected: AtomicU64::new(0),
            malformed_rejected: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a decoded frame
    pub fn frame_decoded(&self, byte_count: u64) {
        self.frames_decoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_decoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record an encoded frame
    pub fn frame_encoded(&self, byte_count: u64) {
        self.frames_encoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    pub fn oversized(&self) {
        self.oversized_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn malformed(&self) {
        self.malformed_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            frames_decoded: self.frames_decoded.load(Ordering::Relaxed),
            frames_encoded: self.frames_encoded.load(Ordering::Relaxed),
            bytes_decoded: self.bytes_decoded.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            oversized_rejected: self.oversized_rejected.load(Ordering::Relaxed),
            malformed_rejected: self.malformed_rejected.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            frames_decoded = snapshot.frames_decoded,
            frames_encoded = snapshot.frames_encoded,
            bytes_decoded = snapshot.bytes_decoded,
            bytes_encoded = snapshot.bytes_encoded,
            oversized_rejected = snapshot.oversized_rejected,
            malformed_rejected = snapshot.malformed_rejected,
            uptime_seconds = snapshot.uptime_seconds,
            "Codec metrics snapshot"
        );
    }
}

impl Default for CodecMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub frames_decoded: u64,
    pub frames_encoded: u64,
    pub bytes_decoded: u64,
    pub bytes_encoded: u64,
    pub oversized_rejected: u64,
    pub malformed_rejected: u64,
    pub uptime_seconds: u64,
}
