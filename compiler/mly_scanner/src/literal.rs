//! String and character literal recognizers.
//!
//! Both are entered with the opening quote already consumed. Neither
//! reports an error: an unterminated string just stops at EOF, and a
//! malformed character literal is "not a literal here". The enclosing
//! recognizer decides what that means.

use crate::Cursor;

/// Consume a string body up to and including the closing `"`.
///
/// An escape is a backslash plus one arbitrary character, skipped as a unit
/// without interpretation. Stops silently at EOF.
pub fn scan_string<C: Cursor>(cursor: &mut C) {
    loop {
        match cursor.skip_to_string_delim() {
            b'\\' => {
                cursor.advance();
                cursor.advance();
            }
            b'"' => {
                cursor.advance();
                return;
            }
            _ => return,
        }
    }
}

/// Outcome of [`probe_char`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CharLiteral {
    /// The closing `'` was found and consumed.
    pub closed: bool,
    /// `closed`, and the body is exactly one valid character or escape.
    pub well_formed: bool,
    /// Decoded byte. `0` when not well-formed, for non-ASCII characters,
    /// and for numeric escapes above 255.
    pub value: u8,
    /// A bare character the probe consumed when no closing quote followed.
    /// The caller must still process it as its next character.
    pub pending: Option<u8>,
}

/// Body of a character literal, before the closing quote.
enum Body {
    /// A valid escape sequence with its decoded value.
    Escape(u8),
    /// One unescaped character.
    Bare(u8),
    /// `''`.
    Empty,
    /// An invalid escape or EOF; nothing more is consumed.
    Malformed,
}

/// Probe for a character literal body after its opening `'`.
///
/// Accepted bodies: `\DDD` (three decimal digits), `\xHH`, `\oOOO` (octal
/// digits), `\\`, `\'`, `\"`, `\n`, `\t`, `\b`, `\r`, `\ `, or any single
/// character. Whatever was consumed stays consumed when the probe fails;
/// callers inside comments and code blocks treat it as ordinary content.
pub fn probe_char<C: Cursor>(cursor: &mut C) -> CharLiteral {
    let body = match cursor.lookahead() {
        b'\\' => {
            cursor.advance();
            escape(cursor)
        }
        b'\'' => Body::Empty,
        0 if cursor.is_eof() => Body::Malformed,
        b => {
            cursor.advance();
            Body::Bare(b)
        }
    };

    if matches!(body, Body::Malformed) {
        return CharLiteral::default();
    }

    if cursor.lookahead() != b'\'' {
        return CharLiteral {
            pending: match body {
                Body::Bare(b) => Some(b),
                _ => None,
            },
            ..CharLiteral::default()
        };
    }
    cursor.advance();

    let (well_formed, value) = match body {
        Body::Escape(value) => (true, value),
        Body::Bare(b) if b.is_ascii() => (true, b),
        Body::Bare(_) => (true, 0),
        Body::Empty | Body::Malformed => (false, 0),
    };
    CharLiteral {
        closed: true,
        well_formed,
        value,
        pending: None,
    }
}

/// Decode the escape after a consumed backslash.
fn escape<C: Cursor>(cursor: &mut C) -> Body {
    let value = match cursor.lookahead() {
        // The three-digit form weighs its digits by 8, so `\061` is `'1'`.
        b'0'..=b'9' => digits(cursor, 3, 8, |b| b.is_ascii_digit()),
        b'x' => {
            cursor.advance();
            digits(cursor, 2, 16, |b| b.is_ascii_hexdigit())
        }
        b'o' => {
            cursor.advance();
            digits(cursor, 3, 8, |b| matches!(b, b'0'..=b'7'))
        }
        b => {
            let Some(value) = simple_escape(b) else {
                return Body::Malformed;
            };
            cursor.advance();
            Some(u32::from(value))
        }
    };
    match value {
        Some(value) => Body::Escape(u8::try_from(value).unwrap_or(0)),
        None => Body::Malformed,
    }
}

/// Value of a one-character escape such as `\n`.
fn simple_escape(b: u8) -> Option<u8> {
    match b {
        b'\\' | b'\'' | b'"' | b' ' => Some(b),
        b'n' => Some(b'\n'),
        b't' => Some(b'\t'),
        b'b' => Some(0x08),
        b'r' => Some(b'\r'),
        _ => None,
    }
}

/// Consume exactly `count` digits accepted by `is_digit`, accumulating in `radix`.
///
/// Returns `None` at the first rejected character, leaving it unconsumed.
fn digits<C: Cursor>(
    cursor: &mut C,
    count: usize,
    radix: u32,
    is_digit: impl Fn(u8) -> bool,
) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..count {
        let b = cursor.lookahead();
        if !is_digit(b) {
            return None;
        }
        value = value * radix + char::from(b).to_digit(16).unwrap_or(0);
        cursor.advance();
    }
    Some(value)
}

#[cfg(test)]
mod tests;
