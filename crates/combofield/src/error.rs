//! Error types for the combobox.

/// Result type alias for combobox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or driving a combobox.
///
/// Construction errors (`InvalidHost`, `EmptyCandidates`) are fatal and leave
/// nothing attached to the host: no decorations are created and no event
/// subscriptions are made. `Disposed` reports programmer misuse -- invoking
/// an operation on a combobox that has already been disposed -- immediately
/// rather than ignoring it, so integration bugs are caught early.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host element is not a single-line text entry.
    #[error("host element must be a text or search entry, got {kind}")]
    InvalidHost { kind: String },

    /// The candidate source contained no entries.
    #[error("candidate source must contain at least one entry")]
    EmptyCandidates,

    /// The combobox has already been disposed.
    #[error("combobox has already been disposed")]
    Disposed,
}

impl Error {
    /// Create an invalid-host error from the offending entry kind.
    pub fn invalid_host(kind: impl Into<String>) -> Self {
        Self::InvalidHost { kind: kind.into() }
    }
}
