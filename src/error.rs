// src/error.rs

//! Unified error handling for the harvester.

use std::fmt;

use thiserror::Error;

/// Result type alias for harvest operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV serialization failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Search response has an unexpected shape
    #[error("Unexpected search response: {0}")]
    Response(String),

    /// A search result item could not be read as a record
    #[error("Record {index} could not be read: {message}")]
    InvalidRecord { index: usize, message: String },

    /// A source record lacks a field one of the mapping rules depends on
    #[error("Record {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an unexpected-response error.
    pub fn response(message: impl Into<String>) -> Self {
        Self::Response(message.into())
    }

    /// Create an unreadable-record error for the item at `index`.
    pub fn invalid_record(index: usize, message: impl fmt::Display) -> Self {
        Self::InvalidRecord {
            index,
            message: message.to_string(),
        }
    }

    /// Create a missing-field error for the record at `index`.
    pub fn missing_field(index: usize, field: &'static str) -> Self {
        Self::MissingField { index, field }
    }
}
