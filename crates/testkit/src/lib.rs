use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use spangate_core::ids::{SpanId, TraceId};
use spangate_core::model::span::{SPAN_KIND_UNSPECIFIED, SpanRecord, SpanStatus};
use spangate_core::model::value::AttributeValue;
use spangate_core::model::wire::WireSpan;
use spangate_core::{Result, SpangateError};
use spangate_export::sender::SpanSender;
use tokio::sync::watch;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fixture epoch: 2026-02-01T00:00:00Z in unix nanoseconds.
pub fn base_unix_nano() -> u64 {
    Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0)
        .unwrap()
        .timestamp_nanos_opt()
        .unwrap() as u64
}

pub fn trace_id(seed: u8) -> TraceId {
    TraceId([seed; 16])
}

pub fn span_id(seed: u8) -> SpanId {
    SpanId([seed; 8])
}

/// Root span with OK status and a single string attribute.
pub fn sample_record(name: &str) -> SpanRecord {
    let start = base_unix_nano();
    SpanRecord {
        name: name.to_string(),
        start_unix_nano: start,
        end_unix_nano: start + 1_800_000_000,
        trace_id: trace_id(1),
        span_id: span_id(2),
        parent_span_id: SpanId([0; 8]),
        kind: SPAN_KIND_UNSPECIFIED,
        status: SpanStatus::default(),
        attributes: vec![("user".to_string(), AttributeValue::from("abc"))],
        annotations: Vec::new(),
        message_events: Vec::new(),
    }
}

/// Minimal wire span for dispatch-level tests that skip conversion.
pub fn sample_wire_span(name: &str) -> WireSpan {
    WireSpan {
        name: name.to_string(),
        start_millis: 1_700_000_000_000,
        duration_millis: 25,
        source: "testkit".to_string(),
        trace_id: trace_id(1).to_uuid_string(),
        span_id: span_id(2).to_uuid_string(),
        parents: Vec::new(),
        tags: Vec::new(),
        logs: Vec::new(),
    }
}

/// Sender that records every span it receives.
#[derive(Default)]
pub struct CapturingSender {
    spans: Mutex<Vec<WireSpan>>,
}

impl CapturingSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn spans(&self) -> Vec<WireSpan> {
        self.spans.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpanSender for CapturingSender {
    async fn send_span(&self, span: &WireSpan) -> Result<()> {
        self.spans.lock().unwrap().push(span.clone());
        Ok(())
    }
}

/// Sender that parks every send until [`open`](GatedSender::open) is
/// called; drives saturation and drop-count tests deterministically.
pub struct GatedSender {
    spans: Mutex<Vec<WireSpan>>,
    gate: watch::Sender<bool>,
}

impl GatedSender {
    pub fn new() -> Arc<Self> {
        let (gate, _) = watch::channel(false);
        Arc::new(Self {
            spans: Mutex::new(Vec::new()),
            gate,
        })
    }

    /// Lets every parked and future send complete.
    pub fn open(&self) {
        let _ = self.gate.send(true);
    }

    pub fn sent(&self) -> usize {
        self.spans.lock().unwrap().len()
    }

    pub fn spans(&self) -> Vec<WireSpan> {
        self.spans.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpanSender for GatedSender {
    async fn send_span(&self, span: &WireSpan) -> Result<()> {
        let mut rx = self.gate.subscribe();
        while !*rx.borrow() {
            if rx.changed().await.is_err() {
                break;
            }
        }
        self.spans.lock().unwrap().push(span.clone());
        Ok(())
    }
}

/// Sender that fails every send; exercises the transport-failure path.
pub struct FailingSender;

#[async_trait]
impl SpanSender for FailingSender {
    async fn send_span(&self, _span: &WireSpan) -> Result<()> {
        Err(SpangateError::Send("synthetic transport failure".to_string()))
    }
}
