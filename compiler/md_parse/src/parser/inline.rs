//! Inline content of a single line.
//!
//! Works on index ranges into the line's tokens. A delimiter opens a span
//! only if its closer is found inside the current range, so a span never
//! extends past the span that contains it.
//!
//! Rules:
//! - `Escape` before a structural token emits that token's text literally.
//!   Before text or at end of line the backslash is literal.
//! - `Bold` and `Cursive` pair with the next unescaped token of the same
//!   kind. An empty pair, or an opener with no closer, is literal text.
//! - `Bold` inside `Cursive` is literal. `Cursive` inside `Bold` nests.
//! - `[label](url)` is a link; the url is the raw text between the parens.
//!   Brackets inside a link label are literal.
//!
//! Closer lookups go through per-kind position lists built once per line,
//! so an unmatched opener costs a binary search rather than a rescan.

use md_lexer_core::{Token, TokenKind};
use tracing::trace;

use crate::tag::{push_node, push_text, TagNode};

#[derive(Clone, Copy, Debug, Default)]
struct Context {
    in_cursive: bool,
    in_link: bool,
}

pub(super) struct Inline<'t, 'a> {
    tokens: &'t [Token<'a>],
    /// Ascending indices of the tokens of each kind that are not the
    /// target of an escape, indexed by `TokenKind as usize`.
    unescaped: [Vec<usize>; TokenKind::ALL.len()],
    /// Ascending indices of every `)`, escaped or not. Link urls are raw.
    close_parens: Vec<usize>,
}

impl<'t, 'a> Inline<'t, 'a> {
    pub(super) fn new(tokens: &'t [Token<'a>]) -> Self {
        let mut unescaped: [Vec<usize>; TokenKind::ALL.len()] = Default::default();
        let mut close_parens = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let tok = tokens[i];
            if tok.is(TokenKind::CloseParen) {
                close_parens.push(i);
            }
            unescaped[tok.kind() as usize].push(i);
            if tok.is(TokenKind::Escape) && escape_applies(tokens.get(i + 1)) {
                if tokens[i + 1].is(TokenKind::CloseParen) {
                    close_parens.push(i + 1);
                }
                i += 2;
            } else {
                i += 1;
            }
        }
        Inline {
            tokens,
            unescaped,
            close_parens,
        }
    }

    pub(super) fn parse_all(&self) -> Vec<TagNode> {
        self.parse_range(0, self.tokens.len(), Context::default())
    }

    fn parse_range(&self, start: usize, end: usize, ctx: Context) -> Vec<TagNode> {
        let mut nodes = Vec::new();
        let mut pos = start;
        while pos < end {
            let tok = self.tokens[pos];
            pos = match tok.kind() {
                TokenKind::Escape => self.escape(pos, end, &mut nodes),
                TokenKind::Bold | TokenKind::Cursive => self.emphasis(pos, end, ctx, &mut nodes),
                TokenKind::OpenBracket if !ctx.in_link => self.link(pos, end, ctx, &mut nodes),
                TokenKind::NewLine => {
                    push_node(&mut nodes, TagNode::new_line());
                    pos + 1
                }
                TokenKind::Text
                | TokenKind::Header1
                | TokenKind::OpenParen
                | TokenKind::CloseParen
                | TokenKind::OpenBracket
                | TokenKind::CloseBracket => {
                    push_text(&mut nodes, tok.text());
                    pos + 1
                }
            };
        }
        nodes
    }

    /// The token escaped by the `Escape` at `pos`, if the escape applies.
    fn escaped(&self, pos: usize, end: usize) -> Option<Token<'a>> {
        self.tokens[pos + 1..end]
            .first()
            .copied()
            .filter(|t| escape_applies(Some(t)))
    }

    fn escape(&self, pos: usize, end: usize, nodes: &mut Vec<TagNode>) -> usize {
        if let Some(next) = self.escaped(pos, end) {
            push_text(nodes, next.text());
            pos + 2
        } else {
            push_text(nodes, self.tokens[pos].text());
            pos + 1
        }
    }

    /// Index of the first unescaped `kind` token in `from..end`.
    fn find(&self, kind: TokenKind, from: usize, end: usize) -> Option<usize> {
        first_in(&self.unescaped[kind as usize], from, end)
    }

    fn emphasis(&self, pos: usize, end: usize, ctx: Context, nodes: &mut Vec<TagNode>) -> usize {
        let opener = self.tokens[pos];
        let kind = opener.kind();
        let closer = if kind == TokenKind::Bold && ctx.in_cursive {
            None
        } else {
            self.find(kind, pos + 1, end)
        };

        match closer {
            Some(close) if close > pos + 1 => {
                trace!(%kind, open = pos, close, "paired emphasis");
                let inner = Context {
                    in_cursive: ctx.in_cursive || kind == TokenKind::Cursive,
                    ..ctx
                };
                let children = self.parse_range(pos + 1, close, inner);
                let node = if kind == TokenKind::Bold {
                    TagNode::bold(children)
                } else {
                    TagNode::cursive(children)
                };
                nodes.push(node);
                close + 1
            }
            _ => {
                trace!(%kind, at = pos, "unpaired emphasis kept as text");
                push_text(nodes, opener.text());
                pos + 1
            }
        }
    }

    fn link(&self, pos: usize, end: usize, ctx: Context, nodes: &mut Vec<TagNode>) -> usize {
        let Some((close_bracket, close_paren)) = self.link_bounds(pos, end) else {
            push_text(nodes, self.tokens[pos].text());
            return pos + 1;
        };

        let label = self.parse_range(
            pos + 1,
            close_bracket,
            Context {
                in_link: true,
                ..ctx
            },
        );
        let url: String = self.tokens[close_bracket + 2..close_paren]
            .iter()
            .map(Token::text)
            .collect();
        trace!(url = %url, "link");
        nodes.push(TagNode::link(url, label));
        close_paren + 1
    }

    /// Positions of `]` and `)` for a link opening at `pos`: `[` ... `](` ... `)`.
    fn link_bounds(&self, pos: usize, end: usize) -> Option<(usize, usize)> {
        let close_bracket = self.find(TokenKind::CloseBracket, pos + 1, end)?;
        let open_paren = close_bracket + 1;
        if open_paren >= end || !self.tokens[open_paren].is(TokenKind::OpenParen) {
            return None;
        }
        let close_paren = first_in(&self.close_parens, open_paren + 1, end)?;
        Some((close_bracket, close_paren))
    }
}

/// An escape applies only to a following structural token other than `NewLine`.
fn escape_applies(next: Option<&Token<'_>>) -> bool {
    next.is_some_and(|t| t.kind().is_structural() && !t.is(TokenKind::NewLine))
}

/// First entry of the ascending list `positions` inside `from..end`.
fn first_in(positions: &[usize], from: usize, end: usize) -> Option<usize> {
    let idx = positions.partition_point(|&p| p < from);
    positions.get(idx).copied().filter(|&p| p < end)
}
