//! External scanner for ocamlyacc/Menhir grammar files.
//!
//! A declarative grammar handles the phrase structure of `.mly` files, but
//! a handful of fragments need matching, nesting or escaping logic it
//! cannot express:
//!
//! - nested OCaml comments `(* ... (* ... *) ... *)`
//! - the extent of embedded OCaml code in `{ ... }` actions and `%{ ... %}`
//!   headers, with braces balanced across strings, character literals,
//!   comments and quoted strings `{tag|...|tag}`
//! - the extent of `<type>` annotations, where `->` is not a terminator
//! - the extent of `[@attribute payload]`, with bracket nesting
//! - `"` delimiters, tracked so comments are not recognized inside strings
//!
//! The host engine calls [`Scanner::scan`] with the token kinds it can
//! accept and a [`Cursor`] over the text. [`ScannerState`] is the only
//! state kept between calls, and it serializes to a few bytes for
//! incremental reparsing.
//!
//! ```
//! use mly_scanner::{Scanner, SourceBuffer, TokenKind, ValidTokens};
//!
//! let source = SourceBuffer::new("  (* outer (* inner *) *) %%");
//! let mut scanner = Scanner::new();
//! let token = scanner.scan_at(&source, 0, ValidTokens::COMMENT);
//! assert_eq!(token.map(|t| (t.kind, t.start, t.len)), Some((TokenKind::Comment, 2, 23)));
//! ```

mod classify;
pub mod comment;
mod cursor;
pub mod embedded;
pub mod extent;
#[cfg(feature = "tree-sitter")]
pub mod ffi;
pub mod literal;
pub mod quoted;
mod scanner;
mod source_buffer;
mod state;
mod token_kind;

pub use classify::is_tag_byte;
pub use cursor::{Cursor, SourceCursor};
pub use literal::CharLiteral;
pub use scanner::Scanner;
pub use source_buffer::SourceBuffer;
pub use state::{QuotedTag, ScannerState, StateError, SERIALIZATION_BUFFER_SIZE};
pub use token_kind::{ScannedToken, TokenKind, ValidTokens};
