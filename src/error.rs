//! Error types for spellrank.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellRankError`] enum.
//!
//! # Examples
//!
//! ```
//! use spellrank::error::{Result, SpellRankError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellRankError::invalid_argument("empty word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spellrank operations.
#[derive(Error, Debug)]
pub enum SpellRankError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input that violates an operation's precondition.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Persisted classifier data that parsed but is not a valid model.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Navigation was requested on a session with no flagged words.
    #[error("Navigation error: no flagged words to navigate")]
    EmptyNavigator,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellRankError.
pub type Result<T> = std::result::Result<T, SpellRankError>;

impl SpellRankError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellRankError::InvalidArgument(msg.into())
    }

    /// Create a new deserialization error.
    pub fn deserialization<S: Into<String>>(msg: S) -> Self {
        SpellRankError::Deserialization(msg.into())
    }

    /// Create a new storage error.
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        SpellRankError::Storage(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellRankError::InvalidConfig(msg.into())
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        SpellRankError::Storage(format!("Not found: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellRankError::Other(msg.into())
    }
}
