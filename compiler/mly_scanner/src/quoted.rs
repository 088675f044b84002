//! Quoted strings with a custom delimiter: `{tag|body|tag}`.
//!
//! `tag` is zero or more of `a-z` and `_`. The body is opaque and ends at
//! the first `|tag}` that repeats the opening tag exactly.
//!
//! The recognizer is split at the opening `|` so the tag can live in
//! [`ScannerState`] between the two halves. The tag is cleared again as
//! soon as the string closes or the attempt is abandoned.

use crate::classify::is_tag_byte;
use crate::{Cursor, ScannerState};

/// Consume a whole quoted string after its `{`.
///
/// Also serves as a probe: when the text after `{` does not open a quoted
/// string, it returns `false` having consumed only the candidate tag.
pub fn scan_quoted_string<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    open_quoted_string(cursor, state) && close_quoted_string(cursor, state)
}

/// Collect the opening tag and its `|`, storing the tag in `state`.
pub fn open_quoted_string<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    state.quoted_tag.clear();
    while is_tag_byte(cursor.lookahead()) {
        state.quoted_tag.push(cursor.lookahead());
        cursor.advance();
    }
    if cursor.lookahead() != b'|' {
        state.quoted_tag.clear();
        return false;
    }
    cursor.advance();
    true
}

/// Consume the body up to and including the `|tag}` matching the stored tag.
///
/// A candidate closer that diverges from the tag is abandoned at the first
/// differing character, and that character is examined afresh, so a real
/// closer starting inside a failed candidate (`|fo|foo}`) is still found.
pub fn close_quoted_string<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    let closed = loop {
        match cursor.lookahead() {
            b'|' => {
                cursor.advance();
                if matches_closer(cursor, &state.quoted_tag) {
                    break true;
                }
            }
            0 if cursor.is_eof() => break false,
            _ => cursor.advance(),
        }
    };
    state.quoted_tag.clear();
    closed
}

/// After a `|`: consume `tag}` if it follows, else stop at the first mismatch.
fn matches_closer<C: Cursor>(cursor: &mut C, tag: &[u8]) -> bool {
    for &expected in tag {
        if cursor.lookahead() != expected {
            return false;
        }
        cursor.advance();
    }
    if cursor.lookahead() != b'}' {
        return false;
    }
    cursor.advance();
    true
}
