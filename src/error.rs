use serde_json::Error as SerdeJsonError;
use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Truncated GIF header: expected {expected} bytes")]
    TruncatedHeader { expected: usize },

    #[error("Invalid text in GIF signature: {0}")]
    Signature(#[from] FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("Invalid value {value:?} for field {field}")]
    InvalidField { field: &'static str, value: String },

    #[error("Not found: {0}")]
    NotFound(String),
}
