use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wire-ready form of one span: formatted identifiers, millisecond
/// timestamps, and the ordered tag and log lists the backend expects.
/// Built fresh per conversion, handed straight to dispatch, never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireSpan {
    pub name: String,
    pub start_millis: i64,
    pub duration_millis: i64,
    pub source: String,
    /// 36-character UUID-shaped text covering all 16 trace-id bytes.
    pub trace_id: String,
    /// 36-character UUID-shaped text; only the last two hyphen groups carry
    /// the 8 span-id bytes.
    pub span_id: String,
    /// Zero or one parent references; empty for root spans.
    pub parents: Vec<String>,
    pub tags: Vec<(String, String)>,
    pub logs: Vec<WireLog>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireLog {
    pub timestamp_millis: i64,
    pub fields: BTreeMap<String, String>,
}
