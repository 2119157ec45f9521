pub mod convert;
pub mod dispatch;
pub mod exporter;
pub mod sender;

pub use convert::SpanConverter;
pub use dispatch::DispatchQueue;
pub use exporter::Exporter;
pub use sender::SpanSender;
