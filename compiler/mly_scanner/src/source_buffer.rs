//! Sentinel-terminated source buffer.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content so
//! that [`SourceCursor`] can report EOF as a plain `0` lookahead without a
//! bounds check on every read. The allocation is rounded up to the next
//! 64-byte boundary; the padding is zero-filled as well.
//!
//! Interior NUL bytes are legal grammar content (they are ordinary
//! characters inside code blocks and comments). The cursor tells them apart
//! from the sentinel by comparing the position against the source length.

use crate::SourceCursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes are truncated to `u32::MAX`;
    /// grammar files never come close.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = u32::try_from(source_bytes.len()).unwrap_or(u32::MAX);
        let copied = source_len as usize;

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (copied + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        let mut buf = vec![0u8; padded_len];
        buf[..copied].copy_from_slice(&source_bytes[..copied]);

        Self { buf, source_len }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`SourceCursor`] positioned at byte 0.
    pub fn cursor(&self) -> SourceCursor<'_> {
        SourceCursor::new(&self.buf, self.source_len, 0)
    }

    /// Create a [`SourceCursor`] positioned at `pos`, clamped to the source length.
    pub fn cursor_at(&self, pos: u32) -> SourceCursor<'_> {
        SourceCursor::new(&self.buf, self.source_len, pos.min(self.source_len))
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
