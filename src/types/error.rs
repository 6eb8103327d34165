use thiserror::Error;

/// car-deals error types
#[derive(Error, Debug)]
pub enum CarDealsError {
    /// A deal source failed to produce its listing
    #[error("source error: {0}")]
    Source(String),

    /// Malformed or unreadable request
    #[error("request error: {0}")]
    Request(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// File or socket I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encode/decode error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for car-deals
pub type Result<T> = std::result::Result<T, CarDealsError>;
