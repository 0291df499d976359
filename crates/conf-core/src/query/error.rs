//! Selector parse and evaluation errors.

use thiserror::Error;

/// Errors raised while parsing or evaluating a selector.
///
/// Offsets are byte offsets into the selector after surrounding whitespace
/// has been trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Empty selector")]
    Empty,

    #[error("Selector must start with '.'")]
    MissingLeadingDot,

    #[error("Unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { offset: usize, found: char },

    #[error("Selector ends unexpectedly at offset {offset}")]
    UnexpectedEnd { offset: usize },

    #[error("Unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("Invalid index {text:?} at offset {offset}")]
    InvalidIndex { offset: usize, text: String },

    /// The selector indexes into a value that cannot be indexed that way,
    /// e.g. `.name.first` where `name` is a string.
    #[error("Cannot apply {step} to a {found}")]
    TypeMismatch { step: String, found: &'static str },
}
