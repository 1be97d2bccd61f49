use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    /// The property is not in the configured allow-list. Suggestions are
    /// simply not activated for that field; this is not a user-facing error.
    #[error("suggestions are not enabled for property {0}")]
    UnsupportedProperty(String),
}
