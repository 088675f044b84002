//! Byte classification shared by the recognizers.

use crate::Cursor;

/// 256-byte lookup table for identifier continuation bytes:
/// `a-z`, `A-Z`, `0-9`, `_` and the apostrophe (`x'`, `don't` in a comment).
/// The sentinel byte (0x00) maps to `false`, terminating loops at EOF.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_' | b'\''
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` starts an identifier run.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Returns `true` if `b` continues an identifier run.
#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Consume the rest of an identifier run whose first character is already consumed.
///
/// Skipping identifiers as a unit keeps `x'` or `don't` from opening a
/// character literal halfway through a word.
#[inline]
pub(crate) fn eat_identifier<C: Cursor>(cursor: &mut C) {
    while is_ident_continue(cursor.lookahead()) {
        cursor.advance();
    }
}

/// Returns `true` if `b` may appear in a quoted-string tag (`{tag|...|tag}`).
#[inline]
pub fn is_tag_byte(b: u8) -> bool {
    b.is_ascii_lowercase() || b == b'_'
}

/// Whitespace skipped before a token: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}
