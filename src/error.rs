//! Error types for glassbrief.

use thiserror::Error;

/// Common error type for glassbrief.
#[derive(Error, Debug)]
pub enum GlassbriefError {
    /// Feed fetch or parse error.
    ///
    /// Raised when a single feed cannot be fetched or parsed. Callers
    /// iterating over multiple feeds log these and continue.
    #[error("feed error: {0}")]
    Feed(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for glassbrief operations.
pub type Result<T> = std::result::Result<T, GlassbriefError>;
