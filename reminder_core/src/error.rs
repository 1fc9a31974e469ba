use thiserror::Error;

/// Outcome of a failed notification attempt.
///
/// `MissingEndpoint` is a configuration problem and is raised before any
/// network I/O. The other two are delivery failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("webhook endpoint not configured")]
    MissingEndpoint,
    #[error("delivery failed: {0}")]
    Transport(String),
    #[error("webhook rejected card: HTTP {status}")]
    Rejected { status: u16 },
}

impl NotifyError {
    /// True for errors that happen before a request is attempted.
    pub fn is_config(&self) -> bool {
        matches!(self, NotifyError::MissingEndpoint)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("slot id must not be empty")]
    EmptyId,
    #[error("duplicate slot id {0:?}")]
    DuplicateId(String),
}
