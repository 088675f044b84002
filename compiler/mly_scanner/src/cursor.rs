//! Character cursor protocol and its buffer-backed implementation.
//!
//! The recognizers never own the text. They see it through [`Cursor`]:
//! peek the current character, consume it (as token content or as
//! trivia), and commit the current position as the token end. The host
//! engine supplies its own implementation (see the `ffi` module for the
//! tree-sitter adapter); [`SourceCursor`] is the in-process one used by
//! [`Scanner::scan_at`](crate::Scanner::scan_at) and the tests.
//!
//! # EOF
//!
//! `lookahead()` is `0` at EOF. A `0` lookahead before EOF is an interior
//! NUL and counts as ordinary content, so loops test
//! `0 if cursor.is_eof()` rather than `0` alone.

/// Character stream seen by the recognizers.
///
/// Characters are reported as bytes. ASCII characters are themselves;
/// any non-ASCII character is reported as some byte `>= 0x80`, which no
/// recognizer treats as a delimiter.
pub trait Cursor {
    /// Current character, or `0` at EOF.
    fn lookahead(&self) -> u8;

    /// Returns `true` once every character has been consumed.
    fn is_eof(&self) -> bool;

    /// Consume the current character as part of the token. No-op at EOF.
    fn advance(&mut self);

    /// Consume the current character as trivia: the token starts after it.
    fn skip(&mut self);

    /// Commit the current position as the end of the token under construction.
    fn mark_end(&mut self);

    /// Advance over ordinary string content up to the next `"` or `\`.
    ///
    /// Returns the byte found, or `0` at EOF. Implementations may search in
    /// bulk; the result must equal consuming one character at a time.
    fn skip_to_string_delim(&mut self) -> u8 {
        loop {
            match self.lookahead() {
                b @ (b'"' | b'\\') => return b,
                0 if self.is_eof() => return 0,
                _ => self.advance(),
            }
        }
    }
}

/// One character of lookahead that a probe has already consumed.
///
/// The character-literal probe reads one character past the opening quote
/// before it knows whether a literal follows. When it does not, that
/// character is handed back here and the calling loop processes it as if
/// it were still the cursor's lookahead, without advancing again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Pending(Option<u8>);

impl Pending {
    /// The next character to process, or `None` at EOF.
    #[inline]
    pub(crate) fn peek<C: Cursor>(self, cursor: &C) -> Option<u8> {
        match self.0 {
            Some(b) => Some(b),
            None if cursor.is_eof() => None,
            None => Some(cursor.lookahead()),
        }
    }

    /// Consume the character returned by [`peek`](Self::peek).
    #[inline]
    pub(crate) fn bump<C: Cursor>(&mut self, cursor: &mut C) {
        if self.0.take().is_none() {
            cursor.advance();
        }
    }

    #[inline]
    pub(crate) fn set(&mut self, pending: Option<u8>) {
        self.0 = pending;
    }

    #[inline]
    pub(crate) fn is(self, b: u8) -> bool {
        self.0 == Some(b)
    }
}

/// Cursor over a sentinel-terminated [`SourceBuffer`](crate::SourceBuffer).
///
/// Positions are byte offsets. [`advance`](Cursor::advance) moves over a
/// whole UTF-8 character, so the cursor always rests on a character
/// boundary and a non-ASCII lookahead is always a leading byte.
///
/// The cursor is [`Copy`]; a saved copy is a complete snapshot, including
/// the token boundaries.
#[derive(Clone, Copy, Debug)]
pub struct SourceCursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position.
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Start of the token under construction.
    token_start: u32,
    /// Last committed token end, if any.
    token_end: Option<u32>,
}

impl<'a> SourceCursor<'a> {
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` and `pos <= source_len`. Both are
    /// guaranteed by `SourceBuffer`.
    pub(crate) fn new(buf: &'a [u8], source_len: u32, pos: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        debug_assert!(pos <= source_len, "cursor starts past the source end");
        Self {
            buf,
            pos,
            source_len,
            token_start: pos,
            token_end: None,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    ///
    /// Safe at any position: the sentinel and padding follow the source.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Start of the token under construction.
    ///
    /// Moves forward with every [`skip`](Cursor::skip).
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token_start
    }

    /// End of the token under construction: the last
    /// [`mark_end`](Cursor::mark_end), or the current position if the
    /// end was never marked.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.token_end.unwrap_or(self.pos)
    }

    /// Begin a new token at the current position.
    pub fn reset_token(&mut self) {
        self.token_start = self.pos;
        self.token_end = None;
    }

    /// Extract a source substring as `&str`.
    ///
    /// Returns `""` if the range is not a valid character range of the
    /// source; ranges built from token boundaries always are.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        std::str::from_utf8(&self.buf[start..end]).unwrap_or_default()
    }

    /// The text of the token under construction.
    pub fn token_text(&self) -> &'a str {
        self.slice(self.token_start, self.token_end())
    }

    /// Number of bytes in the UTF-8 character starting with `byte`.
    #[inline]
    fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }
}

impl Cursor for SourceCursor<'_> {
    #[inline]
    fn lookahead(&self) -> u8 {
        self.current()
    }

    /// EOF is the sentinel byte at or past the source length. An interior
    /// NUL (`pos < source_len`) is not EOF.
    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    fn advance(&mut self) {
        if self.pos < self.source_len {
            let width = Self::utf8_char_width(self.current());
            self.pos = (self.pos + width).min(self.source_len);
        }
    }

    #[inline]
    fn skip(&mut self) {
        self.advance();
        self.token_start = self.pos;
    }

    #[inline]
    fn mark_end(&mut self) {
        self.token_end = Some(self.pos);
    }

    /// `memchr2` search for the next `"` or `\` within the source content.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }
}
