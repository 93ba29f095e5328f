//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The network worker is gone
    #[error("Network worker is not running")]
    WorkerUnavailable,

    /// Navigation target is not a known section
    #[error("Unknown section: {id}")]
    UnknownSection { id: String },

    /// Accent colour could not be parsed
    #[error("Invalid accent colour for {section}: {value}")]
    InvalidAccent { section: String, value: String },
}
