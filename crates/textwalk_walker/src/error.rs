//! Walker error types.

use thiserror::Error;

/// Errors that can occur during a walk.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The value is nested deeper than the configured limit, which is how
    /// cyclic values surface.
    #[error("Depth limit exceeded: value nested deeper than {limit} levels")]
    DepthLimitExceeded { limit: usize },

    /// The sink rejected a textual leaf.
    #[error("Sink error: {0}")]
    Sink(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WalkError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Wraps a sink failure.
    pub fn sink(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Sink(error.into())
    }
}
