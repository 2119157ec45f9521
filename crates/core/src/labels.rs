/// Fallback label for enumeration codes outside their table.
pub const UNKNOWN: &str = "unknown";

pub const SPAN_KINDS: [&str; 3] = ["unspecified", "server", "client"];

/// Status codes from gRPC.
/// https://github.com/googleapis/googleapis/blob/master/google/rpc/code.proto
pub const STATUS_CODES: [&str; 17] = [
    "OK",
    "Cancelled",
    "Unknown",
    "InvalidArgument",
    "DeadlineExceeded",
    "NotFound",
    "AlreadyExists",
    "PermissionDenied",
    "ResourceExhausted",
    "FailedPrecondition",
    "Aborted",
    "OutOfRange",
    "Unimplemented",
    "Internal",
    "Unavailable",
    "DataLoss",
    "Unauthenticated",
];

pub const MESSAGE_EVENT_TYPES: [&str; 3] = ["unspecified", "sent", "received"];

/// Label at `code` when it lands inside the table, `"unknown"` otherwise.
pub fn label_for(code: i64, labels: &[&'static str]) -> &'static str {
    if code < 0 || code >= labels.len() as i64 {
        return UNKNOWN;
    }
    labels[code as usize]
}
