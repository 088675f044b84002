//! Embedded host-language code: semantic actions `{ ... }` and the
//! header/trailer blocks `%{ ... %}`.
//!
//! Entered after the opening delimiter. The code runs to the `}` that
//! balances it; braces inside comments, strings, character literals and
//! quoted strings do not count. The token end is committed after every
//! complete unit and never after the closing `}`, so the token covers the
//! code alone. A `%` directly before the closing `}` belongs to the `%}`
//! delimiter and is left out as well.

use mly_stack::ensure_sufficient_stack;

use crate::classify::{eat_identifier, is_ident_start};
use crate::comment::scan_comment;
use crate::cursor::Pending;
use crate::literal::{probe_char, scan_string};
use crate::quoted::scan_quoted_string;
use crate::{Cursor, ScannerState};

/// Consume code up to (not including) the balancing `}`.
///
/// Returns `false` at EOF.
pub fn scan_embedded_code<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    ensure_sufficient_stack(|| code_block(cursor, state))
}

fn code_block<C: Cursor>(cursor: &mut C, state: &mut ScannerState) -> bool {
    let mut pending = Pending::default();
    cursor.mark_end();
    loop {
        let Some(b) = pending.peek(cursor) else {
            return false;
        };
        pending.bump(cursor);
        match b {
            b'}' => return true,
            b'(' => {
                scan_comment(cursor, state);
            }
            b'\'' => {
                // An unclosed literal may hand back the closer already consumed.
                cursor.mark_end();
                pending.set(probe_char(cursor).pending);
            }
            b'"' => scan_string(cursor),
            b'{' => {
                if !scan_quoted_string(cursor, state) {
                    scan_embedded_code(cursor, state);
                }
            }
            b'%' if cursor.lookahead() == b'}' => continue,
            b if is_ident_start(b) => eat_identifier(cursor),
            _ => {}
        }
        if !pending.is(b'}') {
            cursor.mark_end();
        }
    }
}

#[cfg(test)]
mod tests;
