//! Token vocabulary produced by the lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of input it covers.
//! Tokens are `Copy` and expose no mutators: once the lexer hands one out it
//! is read-only for whoever holds it.

use std::fmt;
use std::ops::Range;

/// Kind of a lexed token.
///
/// Closed set. Every token has exactly one kind, and the parser must handle
/// all of them (including unbalanced delimiters) without failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// Run of ordinary characters.
    Text = 0,
    /// `__`
    Bold = 1,
    /// `_`
    Cursive = 2,
    /// `\`. The escaped character is left for the next token.
    Escape = 3,
    /// `#` at line start followed by whitespace.
    Header1 = 4,
    /// `\n`
    NewLine = 5,
    /// `(`
    OpenParen = 6,
    /// `)`
    CloseParen = 7,
    /// `[`
    OpenBracket = 8,
    /// `]`
    CloseBracket = 9,
}

impl TokenKind {
    /// Every kind, in discriminant order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Text,
        TokenKind::Bold,
        TokenKind::Cursive,
        TokenKind::Escape,
        TokenKind::Header1,
        TokenKind::NewLine,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::OpenBracket,
        TokenKind::CloseBracket,
    ];

    /// Fixed source text for structural kinds; `None` for [`TokenKind::Text`].
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Text => None,
            TokenKind::Bold => Some("__"),
            TokenKind::Cursive => Some("_"),
            TokenKind::Escape => Some("\\"),
            TokenKind::Header1 => Some("#"),
            TokenKind::NewLine => Some("\n"),
            TokenKind::OpenParen => Some("("),
            TokenKind::CloseParen => Some(")"),
            TokenKind::OpenBracket => Some("["),
            TokenKind::CloseBracket => Some("]"),
        }
    }

    /// Returns `true` for markup tokens, `false` for literal content.
    pub const fn is_structural(self) -> bool {
        !matches!(self, TokenKind::Text)
    }

    /// Short human-readable name, used by `Display` and debug dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Bold => "Bold",
            TokenKind::Cursive => "Cursive",
            TokenKind::Escape => "Escape",
            TokenKind::Header1 => "Header1",
            TokenKind::NewLine => "NewLine",
            TokenKind::OpenParen => "OpenParen",
            TokenKind::CloseParen => "CloseParen",
            TokenKind::OpenBracket => "OpenBracket",
            TokenKind::CloseBracket => "CloseBracket",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open byte range `start..end` into the lexed input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. `start` must not exceed `end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The span as a `Range`, for slicing the input it came from.
    #[inline]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.range()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A lexed token: its kind, the input slice it covers, and where.
///
/// `text` always equals `&input[span.range()]`. For structural kinds it
/// also equals [`TokenKind::lexeme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    span: Span,
}

impl<'a> Token<'a> {
    pub const fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Token { kind, text, span }
    }

    #[inline]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
