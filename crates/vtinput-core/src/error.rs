#![forbid(unsafe_code)]

//! Recoverable tokenizer errors.
//!
//! Errors are items in the output stream, not failures of the tokenizer:
//! every error corresponds to a consumed span of input and parsing resumes
//! immediately after it.

use thiserror::Error;

/// A malformed span of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A text run, terminated by a non-text byte, that is not valid UTF-8.
    /// Carries the offending bytes.
    #[error("invalid UTF-8 in text run ({0:02x?})")]
    InvalidUtf8(Vec<u8>),

    /// A well-framed sequence whose payload cannot be interpreted.
    #[error("invalid sequence: {0}")]
    InvalidSequence(String),
}
