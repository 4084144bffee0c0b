//! Pipeline boundaries: tokens in, tag nodes out, string out.

use md_lexer_core::Token;

use crate::tag::TagNode;

/// Builds tag nodes from a token stream.
///
/// Implementations consume the whole stream and must accept every
/// [`TokenKind`](md_lexer_core::TokenKind), including unmatched emphasis and
/// unbalanced brackets, without failing.
pub trait TokenParser {
    fn parse<'a, I>(&self, tokens: I) -> Vec<TagNode>
    where
        I: IntoIterator<Item = Token<'a>>;
}

/// Turns tag nodes into an output string.
pub trait TagRenderer {
    fn render(&self, nodes: &[TagNode]) -> String;
}
