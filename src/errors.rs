//! Centralized error handling.
//!
//! `AppError` covers infrastructure failures only (store unreachable, bad
//! configuration). Business-rule rejections are a separate concept, see
//! [`crate::domain::Rejection`]. They are never folded into this type: a
//! rejected booking is a valid outcome, not an error.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Underlying store failed (connection lost, query error, ...)
    #[error("Repository error: {0}")]
    Repository(String),

    /// Invalid configuration detected at startup
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn repository(msg: impl Into<String>) -> Self {
        AppError::Repository(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
