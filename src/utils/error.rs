use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned HTTP {status}")]
    HttpStatusError { status: reqwest::StatusCode },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Render error: {0}")]
    RenderError(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
