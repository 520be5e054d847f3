use thiserror::Error;

/// Failure modes a widget can hit. None of them is fatal to the page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A required element is not on the page; the widget is skipped.
    #[error("missing anchor `{0}`")]
    MissingAnchor(&'static str),
    /// The runtime refused an async operation (e.g. autoplay policy).
    #[error("operation rejected: {0}")]
    Rejected(String),
    #[error("preference storage failed: {0}")]
    Storage(String),
}

impl WidgetError {
    pub fn is_missing_anchor(&self) -> bool {
        matches!(self, WidgetError::MissingAnchor(_))
    }
}
