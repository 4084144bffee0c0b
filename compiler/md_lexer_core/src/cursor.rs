//! Byte cursor over the markdown source.
//!
//! Every byte the lexer dispatches on is ASCII, so the cursor moves
//! byte-by-byte through structural characters and char-by-char through
//! text. Because UTF-8 continuation bytes never collide with ASCII, a byte
//! search for delimiters always lands on a character boundary.
//!
//! At end of input [`Cursor::current`] returns `0x00`.
//! Interior null bytes also read as `0x00`; [`Cursor::is_eof`] tells them
//! apart by position.

/// Returns the earliest (minimum) of two optional positions.
///
/// Combines results from separate memchr calls when searching for more
/// bytes than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a snapshot is just a copy.
///
/// # Invariant
///
/// `pos` is always on a UTF-8 character boundary and `pos <= source.len()`.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    fn byte_at(&self, index: usize) -> u8 {
        self.source.as_bytes().get(index).copied().unwrap_or(0)
    }

    /// Returns the character starting at the current position.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the character after the current one.
    ///
    /// Decodes a full character, so a multi-byte space after `#` is seen.
    #[inline]
    pub fn peek_char(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Advance the cursor by one byte.
    ///
    /// Only valid when the current byte is ASCII.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        debug_assert!(
            self.pos + n <= self.source.len(),
            "advance past end: {} + {n} > {}",
            self.pos,
            self.source.len()
        );
        self.pos += n;
        debug_assert!(self.source.is_char_boundary(self.pos));
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The unconsumed remainder of the source.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract the source substring `start..end`.
    ///
    /// Both bounds must be character boundaries within the source, which
    /// holds for any pair of positions the cursor has visited.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Advance to the next markdown delimiter byte or EOF.
    ///
    /// Delimiters: `_`, `\`, `\n`, `(`, `)`, `[`, `]`. `#` is not one of
    /// them: it only matters at line start, which the lexer handles before
    /// switching to this fast path.
    pub fn skip_to_delimiter(&mut self) {
        let remaining = self.rest().as_bytes();
        // Emphasis, escape, and line breaks
        let primary = memchr::memchr3(b'_', b'\\', b'\n', remaining);
        // Link brackets
        let brackets = memchr::memchr3(b'(', b')', b'[', remaining);
        let close = memchr::memchr(b']', remaining);

        let offset = earliest_of(primary, earliest_of(brackets, close));

        match offset {
            Some(off) => self.pos += off,
            None => self.pos = self.source.len(),
        }
    }
}
