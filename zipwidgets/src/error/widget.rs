//! Widget error types

/// Errors raised when a widget cannot be projected onto its document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// The accordion has no section with this id.
    #[error("unknown accordion section: {0}")]
    UnknownSection(String),

    /// An element the widget depends on is absent from the document.
    #[error("missing element: {0}")]
    MissingElement(String),

    /// Suggestion index outside the current list.
    #[error("no suggestion at index {index} (list has {len})")]
    NoSuggestion { index: usize, len: usize },
}
