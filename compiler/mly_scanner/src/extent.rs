//! Type annotations (`<int -> bool>`) and attribute payloads (`[@foo ...]`).

use mly_stack::ensure_sufficient_stack;

use crate::classify::{eat_identifier, is_ident_start};
use crate::comment::scan_comment;
use crate::cursor::Pending;
use crate::literal::{probe_char, scan_string};
use crate::{Cursor, ScannerState};

/// Consume a type annotation up to (not including) its terminating `>`.
///
/// The `>` of `->` and of `[>` (open polymorphic variant) does not
/// terminate. Comments are skipped. Returns `false` at EOF.
pub fn scan_type<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    loop {
        match cursor.lookahead() {
            b'(' => {
                cursor.advance();
                scan_comment(cursor, state);
            }
            b'-' | b'[' => {
                cursor.advance();
                if cursor.lookahead() == b'>' {
                    cursor.advance();
                }
            }
            b'>' => {
                cursor.mark_end();
                return true;
            }
            0 if cursor.is_eof() => return false,
            _ => cursor.advance(),
        }
    }
}

/// Consume an attribute payload up to (not including) the `]` matching
/// the already consumed `[`.
///
/// Bracket groups nest; brackets inside comments, strings and character
/// literals do not count. Returns `false` at EOF.
pub fn scan_attribute<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    ensure_sufficient_stack(|| bracket_group(cursor, state))
}

fn bracket_group<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    let mut pending = Pending::default();
    cursor.mark_end();
    loop {
        let Some(b) = pending.peek(cursor) else {
            return false;
        };
        pending.bump(cursor);
        match b {
            b']' => return true,
            b'[' => {
                scan_attribute(cursor, state);
            }
            b'(' => {
                scan_comment(cursor, state);
            }
            b'\'' => {
                // An unclosed literal may hand back the closer already consumed.
                cursor.mark_end();
                pending.set(probe_char(cursor).pending);
            }
            b'"' => scan_string(cursor),
            b if is_ident_start(b) => eat_identifier(cursor),
            _ => {}
        }
        if !pending.is(b']') {
            cursor.mark_end();
        }
    }
}
