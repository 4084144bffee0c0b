//! Reference [`TokenParser`]: line structure and headers.
//!
//! The token stream is cut into lines at `NewLine` tokens. A line whose
//! first non-whitespace token is `Header1` becomes a `Header1` node; every
//! other line is inline content. Inline pairing lives in [`inline`].

mod inline;

use md_lexer_core::{Span, Token, TokenKind};
use tracing::trace;

use crate::tag::{push_node, TagNode};
use crate::traits::TokenParser;
use inline::Inline;

/// Line-oriented parser with inline emphasis, escapes and links.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineParser;

impl InlineParser {
    pub fn new() -> Self {
        InlineParser
    }
}

impl TokenParser for InlineParser {
    fn parse<'a, I>(&self, tokens: I) -> Vec<TagNode>
    where
        I: IntoIterator<Item = Token<'a>>,
    {
        let tokens: Vec<Token<'a>> = tokens.into_iter().collect();
        parse_lines(&tokens)
    }
}

#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
fn parse_lines(tokens: &[Token<'_>]) -> Vec<TagNode> {
    let mut nodes = Vec::new();
    for chunk in tokens.split_inclusive(|t| t.is(TokenKind::NewLine)) {
        match chunk.split_last() {
            Some((last, line)) if last.is(TokenKind::NewLine) => {
                parse_line(line, &mut nodes);
                nodes.push(TagNode::new_line());
            }
            _ => parse_line(chunk, &mut nodes),
        }
    }
    nodes
}

fn parse_line(line: &[Token<'_>], nodes: &mut Vec<TagNode>) {
    let indent = line
        .iter()
        .take_while(|t| t.is(TokenKind::Text) && t.text().chars().all(char::is_whitespace))
        .count();

    match line.get(indent) {
        Some(marker) if marker.is(TokenKind::Header1) => {
            trace!(span = %marker.span(), "header line");
            let content = strip_marker_space(&line[indent + 1..]);
            let children = Inline::new(&content).parse_all();
            nodes.push(TagNode::header1(children));
        }
        _ => {
            for node in Inline::new(line).parse_all() {
                push_node(nodes, node);
            }
        }
    }
}

/// Drop the single whitespace character that separates `#` from the header
/// text. The lexer leaves it at the start of the following `Text` token.
fn strip_marker_space<'a>(content: &[Token<'a>]) -> Vec<Token<'a>> {
    let mut content = content.to_vec();
    let Some(first) = content.first().copied() else {
        return content;
    };
    if !first.is(TokenKind::Text) {
        return content;
    }
    let Some(space) = first.text().chars().next().filter(|c| c.is_whitespace()) else {
        return content;
    };

    let width = space.len_utf8();
    let rest = &first.text()[width..];
    if rest.is_empty() {
        content.remove(0);
    } else {
        let span = Span::new(first.span().start + width, first.span().end);
        content[0] = Token::new(TokenKind::Text, rest, span);
    }
    content
}

#[cfg(test)]
mod tests;
