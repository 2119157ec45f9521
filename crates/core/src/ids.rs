use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 16-byte trace identifier shared by every span in one logical trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(pub [u8; 16]);

/// 8-byte span identifier, unique within a trace. The all-zero value is
/// reserved as the "no parent" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpanId(pub [u8; 8]);

impl TraceId {
    /// Hex-encodes all 16 bytes into the five standard UUID groups
    /// (8-4-4-4-12) in byte order.
    pub fn to_uuid_string(&self) -> String {
        Uuid::from_bytes(self.0).as_hyphenated().to_string()
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl SpanId {
    /// Renders the RFC 4122 shape with the 8 bytes right-aligned into the
    /// last two hyphen groups; the first three groups stay zero.
    pub fn to_uuid_string(&self) -> String {
        let mut bytes = [0u8; 16];
        bytes[8..].copy_from_slice(&self.0);
        Uuid::from_bytes(bytes).as_hyphenated().to_string()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 8]
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}
