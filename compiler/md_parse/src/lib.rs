//! Token-to-tag parsing for the markdown lexer.
//!
//! Defines the two pipeline boundaries that sit after the lexer:
//! [`TokenParser`] (tokens in, [`TagNode`]s out) and [`TagRenderer`]
//! (tag nodes in, string out), plus [`InlineParser`], a reference parser
//! that pairs emphasis, applies escapes, recognizes headers and links.
//!
//! No renderer ships here; output formats belong to the caller.

mod parser;
mod tag;
mod traits;

pub use parser::InlineParser;
pub use tag::{Tag, TagNode};
pub use traits::{TagRenderer, TokenParser};

/// Lex and parse `source` with the reference parser.
pub fn parse(source: &str) -> Vec<TagNode> {
    InlineParser::new().parse(md_lexer_core::lex(source))
}
