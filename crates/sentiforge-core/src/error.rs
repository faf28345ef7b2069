//! Error types for SentiForge

use thiserror::Error;

/// Failure while building a lexicon from tabular data.
///
/// [`Lexicon::load`](crate::Lexicon::load) never returns this directly; it
/// substitutes the fallback lexicon and reports the error alongside it.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The dataset could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset has no header row
    #[error("Lexicon dataset is empty")]
    Empty,

    /// A required column is absent from the header
    #[error("Missing column '{0}' in lexicon header")]
    MissingColumn(&'static str),

    /// A row could not be split into fields
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    /// A row has a blank word
    #[error("Empty word at line {line}")]
    EmptyWord { line: usize },

    /// A score is not a finite number
    #[error("Invalid score '{value}' at line {line}")]
    InvalidScore { line: usize, value: String },

    /// A whole-word matcher could not be compiled
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type alias for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;
