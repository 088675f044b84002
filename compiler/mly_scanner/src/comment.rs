//! Nested block comments: `(* ... (* ... *) ... *)`.
//!
//! Comment bodies follow the host language's lexical rules closely enough
//! that a `*)` inside a string, a character literal or a quoted string
//! does not end the comment.

use mly_stack::ensure_sufficient_stack;

use crate::classify::{eat_identifier, is_ident_start};
use crate::cursor::Pending;
use crate::literal::{probe_char, scan_string};
use crate::quoted::scan_quoted_string;
use crate::{Cursor, ScannerState};

/// Consume a comment whose `(` is already consumed.
///
/// Returns `false` without consuming anything when the next character is
/// not `*`. Otherwise consumes through the matching `*)`, or to EOF (and
/// returns `false`) when the comment never closes.
pub fn scan_comment<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    if cursor.lookahead() != b'*' {
        return false;
    }
    cursor.advance();
    ensure_sufficient_stack(|| comment_body(cursor, state))
}

fn comment_body<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    let mut pending = Pending::default();
    loop {
        let Some(b) = pending.peek(cursor) else {
            return false;
        };
        pending.bump(cursor);
        match b {
            b'(' => {
                // Only `(*` nests; a lone `(` is content.
                scan_comment(cursor, state);
            }
            b'*' => {
                if cursor.lookahead() == b')' {
                    cursor.advance();
                    return true;
                }
            }
            b'\'' => pending.set(probe_char(cursor).pending),
            b'"' => scan_string(cursor),
            b'{' => {
                scan_quoted_string(cursor, state);
            }
            b if is_ident_start(b) => eat_identifier(cursor),
            _ => {}
        }
    }
}
