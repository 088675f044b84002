use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Probe the literal in `source`, which starts with its opening quote.
/// Returns the outcome and the number of bytes consumed after the quote.
fn probe(source: &str) -> (CharLiteral, u32) {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    assert_eq!(cursor.lookahead(), b'\'');
    cursor.advance();
    let literal = probe_char(&mut cursor);
    (literal, cursor.pos() - 1)
}

/// Scan the string in `source`, which starts with its opening quote.
/// Returns the consumed prefix.
fn string(source: &str) -> &str {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    cursor.advance();
    scan_string(&mut cursor);
    &source[..cursor.pos() as usize]
}

fn well_formed(value: u8) -> CharLiteral {
    CharLiteral {
        closed: true,
        well_formed: true,
        value,
        pending: None,
    }
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn string_stops_after_closing_quote() {
    assert_eq!(string("\"abc\" rest"), "\"abc\"");
    assert_eq!(string("\"\""), "\"\"");
}

#[test]
fn string_escape_is_skipped_as_a_unit() {
    assert_eq!(string(r#""a\"b" c"#), r#""a\"b""#);
    assert_eq!(string(r#""\\" c"#), r#""\\""#);
    assert_eq!(string(r#""\q\z" c"#), r#""\q\z""#);
}

#[test]
fn string_hides_comment_closers() {
    assert_eq!(string("\"*) } ]\" x"), "\"*) } ]\"");
}

#[test]
fn unterminated_string_stops_at_eof() {
    assert_eq!(string("\"never closed"), "\"never closed");
    assert_eq!(string("\"trailing escape\\"), "\"trailing escape\\");
}

// ─── Character literals ────────────────────────────────────────

#[test]
fn newline_escape() {
    assert_eq!(probe("'\\n'"), (well_formed(b'\n'), 3));
}

#[test]
fn three_digit_escape() {
    assert_eq!(probe("'\\061'").0, well_formed(b'1'));
    assert_eq!(probe("'\\000'").0, well_formed(0));
}

#[test]
fn hex_escape() {
    assert_eq!(probe("'\\x1F'").0, well_formed(0x1F));
    assert_eq!(probe("'\\xff'").0, well_formed(0xFF));
}

#[test]
fn octal_escape() {
    assert_eq!(probe("'\\o017'").0, well_formed(0o17));
    assert_eq!(probe("'\\o377'").0, well_formed(0xFF));
}

#[test]
fn octal_escape_above_a_byte_is_well_formed_without_value() {
    assert_eq!(probe("'\\o777'").0, well_formed(0));
}

#[test]
fn single_character_escapes() {
    let cases = [
        ("'\\\\'", b'\\'),
        ("'\\''", b'\''),
        ("'\\\"'", b'"'),
        ("'\\t'", b'\t'),
        ("'\\b'", 0x08),
        ("'\\r'", b'\r'),
        ("'\\ '", b' '),
    ];
    for (source, value) in cases {
        assert_eq!(probe(source).0, well_formed(value), "for {source:?}");
    }
}

#[test]
fn unknown_escape_is_malformed() {
    let (literal, consumed) = probe("'\\z'");
    assert!(!literal.closed);
    assert!(!literal.well_formed);
    assert_eq!(literal.value, 0);
    assert_eq!(literal.pending, None);
    assert_eq!(consumed, 1, "only the backslash is consumed");
}

#[test]
fn short_numeric_escapes_are_malformed() {
    for source in ["'\\x1'", "'\\xg0'", "'\\o08'", "'\\o8'", "'\\12'"] {
        let (literal, _) = probe(source);
        assert!(!literal.well_formed, "{source:?} should be malformed");
        assert!(!literal.closed, "{source:?} should not close");
    }
}

#[test]
fn bare_character() {
    assert_eq!(probe("'a'"), (well_formed(b'a'), 2));
    assert_eq!(probe("'}'").0, well_formed(b'}'));
}

#[test]
fn non_ascii_character_is_well_formed_without_value() {
    let (literal, consumed) = probe("'\u{3bb}'");
    assert_eq!(literal, well_formed(0));
    assert_eq!(consumed, 3);
}

#[test]
fn empty_literal_closes_but_is_not_well_formed() {
    let (literal, consumed) = probe("''");
    assert!(literal.closed);
    assert!(!literal.well_formed);
    assert_eq!(consumed, 1);
}

#[test]
fn type_variable_hands_back_its_first_letter() {
    let (literal, consumed) = probe("'a list");
    assert!(!literal.closed);
    assert_eq!(literal.pending, Some(b'a'));
    assert_eq!(consumed, 1);
}

#[test]
fn unclosed_escape_leaves_nothing_pending() {
    let (literal, consumed) = probe("'\\n x");
    assert!(!literal.closed);
    assert_eq!(literal.pending, None);
    assert_eq!(consumed, 2);
}

#[test]
fn quote_at_eof() {
    assert_eq!(probe("'"), (CharLiteral::default(), 0));
}
