//! Markdown tokenizer.
//!
//! Turns a markdown string into a lossless stream of [`Token`]s: ordinary
//! text is coalesced into `Text` runs and each markup character becomes its
//! own structural token. Deciding what the markup *means* (pairing
//! emphasis, applying escapes, matching brackets) is left to the parser.
//!
//! ```
//! use md_lexer_core::{lex, TokenKind};
//!
//! let kinds: Vec<_> = lex("# Title").map(|t| t.kind()).collect();
//! assert_eq!(kinds, [TokenKind::Header1, TokenKind::Text]);
//! ```
//!
//! This crate has no `md_*` dependencies; tools that only need tokens can
//! use it without the tag tree.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Span, Token, TokenKind};

/// Lex `source` lazily.
///
/// Never fails: every string, including the empty one, lexes to completion.
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Lex an input that may be absent.
///
/// Returns [`LexError::MissingInput`] for `None` before any scanning.
pub fn try_lex(source: Option<&str>) -> Result<Lexer<'_>, LexError> {
    source.map(Lexer::new).ok_or(LexError::MissingInput)
}

/// Convenience function: lex `source` and collect every token.
///
/// For pull-based access use [`lex`] directly.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    lex(source).collect()
}
