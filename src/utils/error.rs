//! Error types for Chromeless
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling.

use thiserror::Error;

/// Main error type for Chromeless
#[derive(Error, Debug)]
pub enum ChromelessError {
    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Webview errors
    #[error("Webview error: {0}")]
    Webview(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("File error: {0}")]
    FileIO(#[from] std::io::Error),

    /// Invalid input errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for Results in Chromeless
pub type Result<T> = std::result::Result<T, ChromelessError>;

/// Extension trait for converting other errors to ChromelessError
pub trait IntoShellError<T> {
    /// Convert this error into a ChromelessError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn webview_err(self, context: &str) -> Result<T>;
    fn config_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoShellError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromelessError::Window(format!("{}: {}", context, e)))
    }

    fn webview_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromelessError::Webview(format!("{}: {}", context, e)))
    }

    fn config_err(self, context: &str) -> Result<T> {
        self.map_err(|e| ChromelessError::Config(format!("{}: {}", context, e)))
    }
}
