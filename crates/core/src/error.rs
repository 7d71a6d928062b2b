//! Error types for the rostername core crate.

use thiserror::Error;

/// Top-level error type for all rostername core operations.
#[derive(Debug, Error)]
pub enum RosternameError {
    /// A given or family name was empty or whitespace-only.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested length range is below the floor or inverted.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Every candidate in the search space is already taken.
    #[error("exhausted: {0}")]
    Exhausted(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// A convenience Result alias that defaults to [`RosternameError`].
pub type Result<T> = std::result::Result<T, RosternameError>;
