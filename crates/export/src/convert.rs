use std::collections::BTreeMap;

use spangate_core::labels::{self, MESSAGE_EVENT_TYPES, SPAN_KINDS, STATUS_CODES};
use spangate_core::model::span::{SPAN_KIND_UNSPECIFIED, SpanRecord};
use spangate_core::model::value::AttributeValue;
use spangate_core::model::wire::{WireLog, WireSpan};
use spangate_core::time::{duration_millis, millis_from_nanos};
use spangate_core::value::serialize;

// Span tags
pub const SPAN_KIND_KEY: &str = "span.kind";
pub const ERR_TAG_KEY: &str = "error";
pub const ERR_CODE_TAG_KEY: &str = "error_code";

// Span log fields
pub const ERR_MSG_KEY: &str = "message";
pub const EVENT_KEY: &str = "event";
pub const ANNOTATION_MSG_KEY: &str = "log_msg";
pub const MSG_ID_KEY: &str = "MsgID";
pub const MSG_TYPE_KEY: &str = "MsgType";
pub const MSG_COMPRESSED_SIZE_KEY: &str = "MsgCompressedByteSize";
pub const MSG_UNCOMPRESSED_SIZE_KEY: &str = "MsgUncompressedByteSize";

/// Builds the wire form of each finished span. Holds the source name and
/// static application tags supplied once at configuration time; read-only
/// afterwards, so it is shared freely across producer threads.
#[derive(Debug, Clone)]
pub struct SpanConverter {
    source: String,
    app_tags: Vec<(String, String)>,
}

impl SpanConverter {
    pub fn new(source: impl Into<String>, app_tags: Vec<(String, String)>) -> Self {
        Self {
            source: source.into(),
            app_tags,
        }
    }

    /// Pure and infallible: malformed codes resolve to the `"unknown"`
    /// label and unrecognized value kinds serialize through the opaque arm
    /// rather than failing.
    pub fn convert(&self, record: &SpanRecord) -> WireSpan {
        let mut tags =
            Vec::with_capacity(3 + record.attributes.len() + self.app_tags.len());
        for (key, value) in &record.attributes {
            tags.push((key.clone(), serialize(value)));
        }
        tags.extend(self.app_tags.iter().cloned());

        if record.kind != SPAN_KIND_UNSPECIFIED {
            tags.push((
                SPAN_KIND_KEY.to_string(),
                labels::label_for(i64::from(record.kind), &SPAN_KINDS).to_string(),
            ));
        }
        if !record.status.is_ok() {
            tags.push((ERR_TAG_KEY.to_string(), "true".to_string()));
            tags.push((
                ERR_CODE_TAG_KEY.to_string(),
                labels::label_for(i64::from(record.status.code), &STATUS_CODES).to_string(),
            ));
        }

        let mut logs =
            Vec::with_capacity(1 + record.annotations.len() + record.message_events.len());
        if !record.status.is_ok() && !record.status.message.is_empty() {
            let mut fields = BTreeMap::new();
            fields.insert(ERR_MSG_KEY.to_string(), record.status.message.clone());
            fields.insert(EVENT_KEY.to_string(), ERR_TAG_KEY.to_string());
            logs.push(WireLog {
                timestamp_millis: millis_from_nanos(record.end_unix_nano),
                fields,
            });
        }
        for annotation in &record.annotations {
            let mut fields = BTreeMap::new();
            fields.insert(ANNOTATION_MSG_KEY.to_string(), annotation.message.clone());
            for (key, value) in &annotation.attributes {
                fields.insert(key.clone(), serialize(value));
            }
            logs.push(WireLog {
                timestamp_millis: millis_from_nanos(annotation.time_unix_nano),
                fields,
            });
        }
        for event in &record.message_events {
            let mut fields = BTreeMap::new();
            fields.insert(
                MSG_ID_KEY.to_string(),
                serialize(&AttributeValue::I64(event.message_id)),
            );
            fields.insert(
                MSG_TYPE_KEY.to_string(),
                labels::label_for(i64::from(event.event_type), &MESSAGE_EVENT_TYPES).to_string(),
            );
            fields.insert(
                MSG_COMPRESSED_SIZE_KEY.to_string(),
                serialize(&AttributeValue::I64(event.compressed_size)),
            );
            fields.insert(
                MSG_UNCOMPRESSED_SIZE_KEY.to_string(),
                serialize(&AttributeValue::I64(event.uncompressed_size)),
            );
            logs.push(WireLog {
                timestamp_millis: millis_from_nanos(event.time_unix_nano),
                fields,
            });
        }

        let parents = if record.parent_span_id.is_zero() {
            Vec::new()
        } else {
            vec![record.parent_span_id.to_uuid_string()]
        };

        WireSpan {
            name: record.name.clone(),
            start_millis: millis_from_nanos(record.start_unix_nano),
            duration_millis: duration_millis(record.start_unix_nano, record.end_unix_nano),
            source: self.source.clone(),
            trace_id: record.trace_id.to_uuid_string(),
            span_id: record.span_id.to_uuid_string(),
            parents,
            tags,
            logs,
        }
    }
}
