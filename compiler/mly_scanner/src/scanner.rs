//! Dispatcher: one scan call per grammar decision point.
//!
//! The host engine asks whether any of the [`ValidTokens`] can start at
//! the cursor. After skipping whitespace the dispatcher attempts exactly
//! one recognizer, in fixed priority order:
//!
//! 1. `Comment`, when not inside a grammar string and the lookahead is `(*`
//! 2. `EmbeddedCode` (its opening delimiter was already consumed by the grammar)
//! 3. `TypeExtent`
//! 4. `AttributeExtent`
//! 5. `StringDelimiter`, when the lookahead is `"`
//!
//! A failed attempt produces no token, however far the cursor moved.

use tracing::{debug, trace};

use crate::classify::is_space;
use crate::comment::scan_comment;
use crate::embedded::scan_embedded_code;
use crate::extent::{scan_attribute, scan_type};
use crate::{
    Cursor, ScannedToken, ScannerState, SourceBuffer, StateError, TokenKind, ValidTokens,
};

/// The external scanner. Owns the only state that survives between calls.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scanner {
    state: ScannerState,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current persistent state.
    pub fn state(&self) -> &ScannerState {
        &self.state
    }

    /// Write the persistent state into `buf`; see [`ScannerState::serialize_into`].
    pub fn serialize_into(&self, buf: &mut [u8]) -> Result<usize, StateError> {
        self.state.serialize_into(buf)
    }

    /// The persistent state as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.state.to_bytes()
    }

    /// Restore the persistent state. Empty input restores the default.
    ///
    /// On error the state is reset to the default before returning.
    pub fn deserialize(&mut self, bytes: &[u8]) -> Result<(), StateError> {
        match ScannerState::from_bytes(bytes) {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(err) => {
                debug!(%err, len = bytes.len(), "discarding undecodable scanner state");
                self.state = ScannerState::default();
                Err(err)
            }
        }
    }

    /// Try to produce one of `valid` at the cursor.
    ///
    /// On success the token end is committed on the cursor and the kind is
    /// returned. On failure the cursor may have moved but no token exists.
    pub fn scan<C: Cursor>(&mut self, cursor: &mut C, valid: ValidTokens) -> Option<TokenKind> {
        while is_space(cursor.lookahead()) {
            cursor.skip();
        }

        let Some((kind, matched)) = self.dispatch(cursor, valid) else {
            trace!(?valid, "no recognizer applies");
            return None;
        };
        trace!(
            ?valid,
            kind = kind.name(),
            matched,
            in_string = self.state.in_string,
            "external scan"
        );
        matched.then_some(kind)
    }

    /// Run one scan call over `buffer` starting at byte `pos`.
    pub fn scan_at(
        &mut self,
        buffer: &SourceBuffer,
        pos: u32,
        valid: ValidTokens,
    ) -> Option<ScannedToken> {
        let mut cursor = buffer.cursor_at(pos);
        let kind = self.scan(&mut cursor, valid)?;
        let start = cursor.token_start();
        Some(ScannedToken {
            kind,
            start,
            len: cursor.token_end() - start,
        })
    }

    /// Pick the recognizer for this call. `None` when none applies.
    fn dispatch<C: Cursor>(
        &mut self,
        cursor: &mut C,
        valid: ValidTokens,
    ) -> Option<(TokenKind, bool)> {
        let state = &mut self.state;
        let lookahead = cursor.lookahead();

        if !state.in_string && valid.contains(ValidTokens::COMMENT) && lookahead == b'(' {
            cursor.advance();
            if cursor.lookahead() == b'*' {
                let matched = scan_comment(cursor, state);
                if matched {
                    cursor.mark_end();
                }
                return Some((TokenKind::Comment, matched));
            }
            // A lone `(` is an ordinary unit to every extent recognizer, so
            // they continue from here with it as their first character.
        }
        if valid.contains(ValidTokens::EMBEDDED_CODE) {
            return Some((TokenKind::EmbeddedCode, scan_embedded_code(cursor, state)));
        }
        if valid.contains(ValidTokens::TYPE_EXTENT) {
            return Some((TokenKind::TypeExtent, scan_type(cursor, state)));
        }
        if valid.contains(ValidTokens::ATTRIBUTE_EXTENT) {
            return Some((TokenKind::AttributeExtent, scan_attribute(cursor, state)));
        }
        if valid.contains(ValidTokens::STRING_DELIMITER) && lookahead == b'"' {
            cursor.advance();
            cursor.mark_end();
            state.in_string = !state.in_string;
            return Some((TokenKind::StringDelimiter, true));
        }
        None
    }
}
