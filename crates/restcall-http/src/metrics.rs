//! Observability sink for received responses
//!
//! The dispatcher records the URL and status code of every HTTP response
//! it actually receives, regardless of status. Recording is fire-and-forget
//! and can never influence how the call resolves.

use tracing::info;

/// Sink receiving one record per response received from the transport
pub trait MetricsSink: Send + Sync {
    fn record(&self, url: &str, status: u16);
}

/// Default sink: emits a `tracing` event per response
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MetricsSink for TracingSink {
    fn record(&self, url: &str, status: u16) {
        info!(url, status, "request completed");
    }
}

/// Sink that discards every record
#[derive(Debug, Default, Clone, Copy)]
pub struct NopSink;

impl MetricsSink for NopSink {
    fn record(&self, _url: &str, _status: u16) {}
}
