use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpangateError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("send error: {0}")]
    Send(String),
}

pub type Result<T> = std::result::Result<T, SpangateError>;
