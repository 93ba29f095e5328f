//! Submission-specific error types.

/// Errors a submission collaborator can report.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("Inquiry rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Generic delivery failure
    #[error("Submission failed: {0}")]
    Other(String),
}
