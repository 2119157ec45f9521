use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use spangate_core::model::wire::WireSpan;
use tokio::runtime::Handle;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::sender::SpanSender;

/// Admission gate in front of the backend sender. At most `max_in_flight`
/// sends run at once; a span that cannot reserve a slot immediately is
/// dropped and counted, never queued or retried.
pub struct DispatchQueue {
    sender: Arc<dyn SpanSender>,
    slots: Arc<Semaphore>,
    max_in_flight: u32,
    dropped: AtomicU64,
    handle: Handle,
}

impl DispatchQueue {
    /// Captures the current tokio runtime handle; sends spawned by
    /// [`submit`](Self::submit) land there no matter which thread submits.
    ///
    /// Panics outside a runtime; use [`with_handle`](Self::with_handle)
    /// when constructing from a non-runtime thread.
    pub fn new(sender: Arc<dyn SpanSender>, max_in_flight: usize) -> Self {
        Self::with_handle(sender, max_in_flight, Handle::current())
    }

    pub fn with_handle(sender: Arc<dyn SpanSender>, max_in_flight: usize, handle: Handle) -> Self {
        let max_in_flight = u32::try_from(max_in_flight.max(1)).unwrap_or(u32::MAX);
        Self {
            sender,
            slots: Arc::new(Semaphore::new(max_in_flight as usize)),
            max_in_flight,
            dropped: AtomicU64::new(0),
            handle,
        }
    }

    /// Non-blocking admission. Reserves a slot, spawns the send, and
    /// returns `true` without waiting for the send to finish. Returns
    /// `false` when every slot is in flight; the span is dropped and the
    /// drop counter incremented.
    pub fn submit(&self, span: WireSpan) -> bool {
        match Arc::clone(&self.slots).try_acquire_owned() {
            Ok(permit) => {
                let sender = Arc::clone(&self.sender);
                self.handle.spawn(async move {
                    // The permit drops when this task finishes, releasing
                    // the slot exactly once whatever the send outcome.
                    let _slot = permit;
                    if let Err(err) = sender.send_span(&span).await {
                        warn!(span = %span.name, error = %err, "error sending span");
                    }
                });
                true
            }
            Err(_) => {
                let dropped = self.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(dropped, "span dropped: dispatch saturated");
                false
            }
        }
    }

    /// Total spans rejected at admission since construction.
    pub fn spans_dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Resolves once every in-flight send has finished. Submissions racing
    /// with the drain may be rejected while it briefly holds all slots.
    pub async fn flush(&self) {
        if let Ok(all_slots) = self.slots.acquire_many(self.max_in_flight).await {
            drop(all_slots);
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use spangate_core::{Result, SpangateError};

    use super::*;

    struct OkSender;

    #[async_trait]
    impl SpanSender for OkSender {
        async fn send_span(&self, _span: &WireSpan) -> Result<()> {
            Ok(())
        }
    }

    struct FailSender;

    #[async_trait]
    impl SpanSender for FailSender {
        async fn send_span(&self, _span: &WireSpan) -> Result<()> {
            Err(SpangateError::Send("backend unavailable".to_string()))
        }
    }

    fn wire_span(name: &str) -> WireSpan {
        WireSpan {
            name: name.to_string(),
            start_millis: 0,
            duration_millis: 0,
            source: "test".to_string(),
            trace_id: "00000000-0000-0000-0000-000000000001".to_string(),
            span_id: "00000000-0000-0000-0000-000000000002".to_string(),
            parents: Vec::new(),
            tags: Vec::new(),
            logs: Vec::new(),
        }
    }

    #[tokio::test]
    async fn accepted_submit_returns_before_send_completes() {
        let queue = DispatchQueue::new(Arc::new(OkSender), 1);
        assert!(queue.submit(wire_span("a")));
        assert_eq!(queue.spans_dropped(), 0);
        queue.flush().await;
    }

    #[tokio::test]
    async fn failed_send_still_releases_its_slot() {
        let queue = DispatchQueue::new(Arc::new(FailSender), 1);
        assert!(queue.submit(wire_span("a")));
        queue.flush().await;
        // The slot freed by the failed send admits the next span.
        assert!(queue.submit(wire_span("b")));
        queue.flush().await;
        assert_eq!(queue.spans_dropped(), 0);
    }
}
