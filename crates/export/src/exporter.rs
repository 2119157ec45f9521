use std::sync::Arc;

use spangate_core::config::ExporterConfig;
use spangate_core::model::span::SpanRecord;

use crate::convert::SpanConverter;
use crate::dispatch::DispatchQueue;
use crate::sender::SpanSender;

/// Per-span entry point tying conversion to dispatch. Conversion runs on
/// the calling thread; the send runs on the captured runtime. Share one
/// instance behind an `Arc` across instrumentation callbacks.
pub struct Exporter {
    converter: SpanConverter,
    queue: DispatchQueue,
}

impl Exporter {
    /// Must be called from within a tokio runtime; the dispatch queue
    /// captures the runtime handle for spawned sends.
    pub fn new(cfg: &ExporterConfig, sender: Arc<dyn SpanSender>) -> Self {
        Self {
            converter: SpanConverter::new(cfg.source.clone(), cfg.app_tags.clone()),
            queue: DispatchQueue::new(sender, cfg.max_in_flight),
        }
    }

    /// Converts and submits one finished span. Never blocks and never
    /// fails: admission rejection is metered on the drop counter and
    /// transport failures are logged by the dispatch queue.
    pub fn export_span(&self, record: &SpanRecord) {
        self.queue.submit(self.converter.convert(record));
    }

    /// Spans rejected because the concurrency ceiling was saturated.
    pub fn spans_dropped(&self) -> u64 {
        self.queue.spans_dropped()
    }

    /// Waits for every in-flight send to complete.
    pub async fn flush(&self) {
        self.queue.flush().await;
    }
}
