use async_trait::async_trait;
use spangate_core::Result;
use spangate_core::model::wire::WireSpan;

/// Backend client boundary. Implementations own the transport mechanics;
/// batching, timeouts, and reconnects all live behind this trait. The
/// dispatch queue invokes one call per admitted span and observes the
/// outcome only for logging.
#[async_trait]
pub trait SpanSender: Send + Sync {
    async fn send_span(&self, span: &WireSpan) -> Result<()>;
}
