//! Lexer error type.
//!
//! The lexer accepts every string, so the only failure is a caller that has
//! no string to give it. Malformed markdown is never an error here: it shows
//! up as structural tokens the parser resolves or tolerates.

use thiserror::Error;

/// Precondition failure raised before any scanning begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum LexError {
    /// No input string was supplied.
    #[error("no input was supplied to the lexer")]
    MissingInput,
}
