use serde::{Deserialize, Serialize};

use super::value::AttributeValue;
use crate::ids::{SpanId, TraceId};

pub const SPAN_KIND_UNSPECIFIED: i32 = 0;
pub const SPAN_KIND_SERVER: i32 = 1;
pub const SPAN_KIND_CLIENT: i32 = 2;

pub const STATUS_CODE_OK: i32 = 0;

pub const MESSAGE_EVENT_UNSPECIFIED: i32 = 0;
pub const MESSAGE_EVENT_SENT: i32 = 1;
pub const MESSAGE_EVENT_RECEIVED: i32 = 2;

/// One completed span as delivered by the instrumentation layer. Read-only
/// to this system; conversion builds a fresh [`super::wire::WireSpan`] from
/// it on every call.
///
/// `kind`, `status.code`, and `event_type` are open integer enumerations:
/// values outside the known tables are carried through and resolve to the
/// `"unknown"` label at conversion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanRecord {
    pub name: String,
    pub start_unix_nano: u64,
    pub end_unix_nano: u64,
    pub trace_id: TraceId,
    pub span_id: SpanId,
    /// All-zero means a root span with no parent.
    pub parent_span_id: SpanId,
    pub kind: i32,
    pub status: SpanStatus,
    pub attributes: Vec<(String, AttributeValue)>,
    pub annotations: Vec<Annotation>,
    pub message_events: Vec<MessageEvent>,
}

impl SpanRecord {
    pub fn is_root(&self) -> bool {
        self.parent_span_id.is_zero()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanStatus {
    pub code: i32,
    pub message: String,
}

impl SpanStatus {
    pub fn is_ok(&self) -> bool {
        self.code == STATUS_CODE_OK
    }
}

/// Timestamped free-text note attached to a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub time_unix_nano: u64,
    pub message: String,
    pub attributes: Vec<(String, AttributeValue)>,
}

/// Timestamped record of a send or receive occurrence within a span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub time_unix_nano: u64,
    pub event_type: i32,
    pub message_id: i64,
    pub compressed_size: i64,
    pub uncompressed_size: i64,
}
