//! Parse error types for list pattern templates.

use thiserror::Error;

/// An error that occurred while tokenizing a template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The placeholder syntax could not be parsed.
    ///
    /// `offset` is the byte offset of the brace that starts the bad
    /// placeholder (or of the stray closing brace).
    #[error("invalid template '{template}' at offset {offset}: {message}")]
    InvalidTemplate {
        template: String,
        offset: usize,
        message: String,
    },
}

impl ParseError {
    /// Byte offset of the offending character within the template.
    pub fn offset(&self) -> usize {
        match self {
            ParseError::InvalidTemplate { offset, .. } => *offset,
        }
    }
}
