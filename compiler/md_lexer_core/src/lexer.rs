//! Hand-written markdown lexer.
//!
//! The lexer walks a byte cursor left to right and produces one [`Token`] per
//! call to `next()`. It never backtracks; the only lookahead is a single
//! character, used to tell `__` from `_` and a header `# ` from a literal `#`.
//!
//! # Design
//!
//! Main dispatch matches the current byte against the delimiter set. Each
//! arm calls a focused method that advances the cursor and returns the
//! token kind; `next_token` slices the covered text afterwards, so every
//! token is a contiguous piece of the input and the stream is lossless.
//!
//! # Line-start state
//!
//! `at_line_start` is true at input start and after each newline, and stays
//! true while only whitespace has been consumed on the line. It gates header
//! recognition: `  # Title` yields a header, `a# Title` does not.

use tracing::trace;

use crate::cursor::Cursor;
use crate::token::{Span, Token, TokenKind};

/// Lazy, single-pass token iterator over one input string.
///
/// Holds only the borrowed input, the scan position, and the line-start
/// flag. Re-lexing means constructing a new `Lexer`; two lexers over the
/// same input yield identical sequences.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    at_line_start: bool,
    /// Set once any token has been yielded. Empty input yields a single
    /// empty `Text` token, so EOF alone cannot end the stream.
    yielded: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            at_line_start: true,
            yielded: false,
        }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Whether only whitespace has been consumed since the last line break.
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Produce the next token. Must not be called at EOF.
    fn next_token(&mut self) -> Token<'a> {
        let start = self.cursor.pos();
        let kind = match self.cursor.current() {
            b'_' => self.underscore(),
            b'\\' => self.single(TokenKind::Escape),
            b'#' => self.hash(),
            b'\n' => self.newline(),
            b'(' => self.single(TokenKind::OpenParen),
            b')' => self.single(TokenKind::CloseParen),
            b'[' => self.single(TokenKind::OpenBracket),
            b']' => self.single(TokenKind::CloseBracket),
            _ => self.text(),
        };
        let end = self.cursor.pos();
        let token = Token::new(kind, self.cursor.slice(start, end), Span::new(start, end));
        trace!(kind = %token.kind(), span = %token.span(), "token");
        token
    }

    // ─── Delimiters ─────────────────────────────────────────────────

    /// Single-byte structural token: advance one byte and emit `kind`.
    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        self.at_line_start = false;
        kind
    }

    fn underscore(&mut self) -> TokenKind {
        self.cursor.advance(); // consume '_'
        self.at_line_start = false;
        if self.cursor.current() == b'_' {
            self.cursor.advance();
            TokenKind::Bold
        } else {
            TokenKind::Cursive
        }
    }

    fn newline(&mut self) -> TokenKind {
        self.cursor.advance();
        self.at_line_start = true;
        TokenKind::NewLine
    }

    /// `#` is a header marker only as the first non-whitespace content of a
    /// line and only when whitespace follows. The whitespace itself is left
    /// for the following text run.
    fn hash(&mut self) -> TokenKind {
        let followed_by_space = self.cursor.peek_char().is_some_and(char::is_whitespace);
        if self.at_line_start && followed_by_space {
            self.cursor.advance(); // consume '#'
            self.at_line_start = false;
            TokenKind::Header1
        } else {
            self.text()
        }
    }

    // ─── Text ───────────────────────────────────────────────────────

    /// Greedy run of ordinary characters.
    ///
    /// The first character is always consumed: dispatch only lands here on a
    /// non-delimiter or on a `#` that failed the header test. While the line
    /// is still whitespace-only, each character is checked individually and
    /// `#` ends the run so that a header marker can follow. Once the line has
    /// content, the rest of the run is found with a delimiter search.
    fn text(&mut self) -> TokenKind {
        self.eat_text_char();
        while self.at_line_start {
            let b = self.cursor.current();
            if self.cursor.is_eof() || is_delimiter(b) || b == b'#' {
                return TokenKind::Text;
            }
            self.eat_text_char();
        }
        self.cursor.skip_to_delimiter();
        TokenKind::Text
    }

    #[inline]
    fn eat_text_char(&mut self) {
        if let Some(ch) = self.cursor.current_char() {
            self.at_line_start = self.at_line_start && ch.is_whitespace();
            self.cursor.advance_n(ch.len_utf8());
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_eof() {
            if self.yielded {
                return None;
            }
            self.yielded = true;
            trace!("empty input");
            return Some(Token::new(TokenKind::Text, "", Span::new(0, 0)));
        }
        self.yielded = true;
        Some(self.next_token())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_eof() {
            let n = usize::from(!self.yielded);
            (n, Some(n))
        } else {
            // Every token covers at least one byte.
            (1, Some(self.cursor.source_len() - self.cursor.pos()))
        }
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// 256-byte lookup table for bytes that always end a text run.
/// `true` for `_`, `\`, `\n`, `(`, `)`, `[`, `]`.
/// `#` is excluded: it only ends a run while the line is whitespace-only.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_DELIMITER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'_' | b'\\' | b'\n' | b'(' | b')' | b'[' | b']'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` always ends a text run.
#[inline]
fn is_delimiter(b: u8) -> bool {
    IS_DELIMITER_TABLE[b as usize]
}
