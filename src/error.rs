//! Error types for Correcto.
//!
//! The suggestion engine itself never fails: lookups on an empty vocabulary or
//! with a zero suggestion cap simply produce empty output. Errors only arise at
//! the edges, when reading a word source, loading a config file or rendering
//! output.
//!
//! # Examples
//!
//! ```
//! use correcto::error::{CorrectoError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(CorrectoError::invalid_config("tolerance steps must be monotonic"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Correcto operations.
#[derive(Error, Debug)]
pub enum CorrectoError {
    /// I/O errors (dictionary files, stdin, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors carrying added context, printed with their whole cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with CorrectoError.
pub type Result<T> = std::result::Result<T, CorrectoError>;

impl CorrectoError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        CorrectoError::InvalidConfig(msg.into())
    }
}
