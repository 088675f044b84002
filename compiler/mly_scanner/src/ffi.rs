//! tree-sitter external scanner ABI for the `ocamlyacc` grammar.
//!
//! tree-sitter links a grammar's external scanner through five C symbols
//! named after the language. Each one wraps the safe [`Scanner`] API; the
//! lexer handed to `scan` is adapted to [`Cursor`] by [`TsCursor`].
//!
//! # Safety
//!
//! The exported functions are called only by the tree-sitter runtime,
//! which passes the payload pointer returned by `create`, a live lexer, a
//! `valid_symbols` array with one entry per external token, and a
//! serialization buffer of [`SERIALIZATION_BUFFER_SIZE`] bytes. They are
//! not marked `unsafe` because they are FFI entry points, not Rust API.

#![allow(unsafe_code, reason = "tree-sitter external scanner C ABI")]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use std::ffi::{c_char, c_void};

use tracing::debug;

use crate::{Cursor, Scanner, TokenKind, ValidTokens, SERIALIZATION_BUFFER_SIZE};

/// Prefix of tree-sitter's `TSLexer`.
///
/// Only the fields the scanner uses are mirrored. The runtime owns the
/// struct and it is only ever accessed through a pointer, so trailing
/// fields added by newer runtimes do not affect this layout.
#[repr(C)]
pub struct TSLexer {
    pub lookahead: i32,
    pub result_symbol: u16,
    pub advance: unsafe extern "C" fn(*mut TSLexer, bool),
    pub mark_end: unsafe extern "C" fn(*mut TSLexer),
    pub get_column: unsafe extern "C" fn(*mut TSLexer) -> u32,
    pub is_at_included_range_start: unsafe extern "C" fn(*const TSLexer) -> bool,
    pub eof: unsafe extern "C" fn(*const TSLexer) -> bool,
}

/// [`Cursor`] over a tree-sitter lexer.
///
/// Non-ASCII lookahead (tree-sitter reports whole code points) becomes
/// `0x80`, which no recognizer treats as a delimiter.
pub struct TsCursor<'a> {
    lexer: &'a mut TSLexer,
}

impl<'a> TsCursor<'a> {
    pub fn new(lexer: &'a mut TSLexer) -> Self {
        TsCursor { lexer }
    }

    fn step(&mut self, skip: bool) {
        if self.is_eof() {
            return;
        }
        let lexer: *mut TSLexer = &mut *self.lexer;
        // SAFETY: the function pointer and the lexer both come from the runtime.
        unsafe { (self.lexer.advance)(lexer, skip) }
    }
}

impl Cursor for TsCursor<'_> {
    #[inline]
    fn lookahead(&self) -> u8 {
        match u8::try_from(self.lexer.lookahead) {
            Ok(b) if b < 0x80 => b,
            _ => 0x80,
        }
    }

    #[inline]
    fn is_eof(&self) -> bool {
        let lexer: *const TSLexer = &*self.lexer;
        // SAFETY: the function pointer and the lexer both come from the runtime.
        unsafe { (self.lexer.eof)(lexer) }
    }

    #[inline]
    fn advance(&mut self) {
        self.step(false);
    }

    #[inline]
    fn skip(&mut self) {
        self.step(true);
    }

    #[inline]
    fn mark_end(&mut self) {
        let lexer: *mut TSLexer = &mut *self.lexer;
        // SAFETY: the function pointer and the lexer both come from the runtime.
        unsafe { (self.lexer.mark_end)(lexer) }
    }
}

/// Allocate a scanner with the default state.
#[no_mangle]
pub extern "C" fn tree_sitter_ocamlyacc_external_scanner_create() -> *mut c_void {
    Box::into_raw(Box::new(Scanner::new())).cast()
}

/// Free a scanner returned by `create`.
#[no_mangle]
pub extern "C" fn tree_sitter_ocamlyacc_external_scanner_destroy(payload: *mut c_void) {
    if payload.is_null() {
        return;
    }
    // SAFETY: `payload` came from `Box::into_raw` in `create` and is freed once.
    drop(unsafe { Box::from_raw(payload.cast::<Scanner>()) });
}

/// Write the scanner state into `buffer`, returning the byte count.
///
/// A state that does not fit is written as empty (the default state).
#[no_mangle]
pub extern "C" fn tree_sitter_ocamlyacc_external_scanner_serialize(
    payload: *mut c_void,
    buffer: *mut c_char,
) -> u32 {
    if payload.is_null() || buffer.is_null() {
        return 0;
    }
    // SAFETY: `payload` is a live scanner from `create`.
    let scanner = unsafe { &*payload.cast::<Scanner>() };
    // SAFETY: the runtime's buffer holds SERIALIZATION_BUFFER_SIZE bytes.
    let out =
        unsafe { std::slice::from_raw_parts_mut(buffer.cast::<u8>(), SERIALIZATION_BUFFER_SIZE) };
    match scanner.serialize_into(out) {
        Ok(len) => u32::try_from(len).unwrap_or(0),
        Err(err) => {
            debug!(%err, "scanner state does not fit; serializing the default state");
            0
        }
    }
}

/// Restore the scanner state from `length` bytes at `buffer`.
///
/// Undecodable input resets the scanner to the default state.
#[no_mangle]
pub extern "C" fn tree_sitter_ocamlyacc_external_scanner_deserialize(
    payload: *mut c_void,
    buffer: *const c_char,
    length: u32,
) {
    if payload.is_null() {
        return;
    }
    // SAFETY: `payload` is a live scanner from `create`.
    let scanner = unsafe { &mut *payload.cast::<Scanner>() };
    let bytes = if buffer.is_null() || length == 0 {
        &[][..]
    } else {
        // SAFETY: the runtime passes `length` readable bytes at `buffer`.
        unsafe { std::slice::from_raw_parts(buffer.cast::<u8>(), length as usize) }
    };
    // The scanner already logged and reset on error.
    let _ = scanner.deserialize(bytes);
}

/// Run one scan call. On success `result_symbol` holds the token kind.
#[no_mangle]
pub extern "C" fn tree_sitter_ocamlyacc_external_scanner_scan(
    payload: *mut c_void,
    lexer: *mut TSLexer,
    valid_symbols: *const bool,
) -> bool {
    if payload.is_null() || lexer.is_null() || valid_symbols.is_null() {
        return false;
    }
    // SAFETY: `payload` is a live scanner from `create`.
    let scanner = unsafe { &mut *payload.cast::<Scanner>() };
    // SAFETY: the runtime passes one flag per external token.
    let symbols = unsafe { std::slice::from_raw_parts(valid_symbols, TokenKind::ALL.len()) };
    // SAFETY: the lexer stays live for the duration of the call.
    let lexer = unsafe { &mut *lexer };

    let valid = ValidTokens::from_symbols(symbols);
    let Some(kind) = scanner.scan(&mut TsCursor::new(lexer), valid) else {
        return false;
    };
    lexer.result_symbol = kind.symbol();
    true
}
