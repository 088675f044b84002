use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Scan code in `source`, which starts right after the opening delimiter.
/// Returns the outcome, the token text and the consumed prefix.
fn code(source: &str) -> (bool, &str, &str) {
    let buf = SourceBuffer::new(source);
    let mut cursor = buf.cursor();
    let mut state = ScannerState::default();
    let closed = scan_embedded_code(&mut cursor, &mut state);
    let end = cursor.token_end() as usize;
    (closed, &source[..end], &source[..cursor.pos() as usize])
}

#[test]
fn action_ends_before_closing_brace() {
    assert_eq!(code(" $1 + $3 } rest"), (true, " $1 + $3 ", " $1 + $3 }"));
}

#[test]
fn last_word_before_brace_is_included() {
    assert_eq!(code("x} rest"), (true, "x", "x}"));
}

#[test]
fn header_excludes_percent_of_closing_delimiter() {
    assert_eq!(
        code(" open Ast %}\n%%"),
        (true, " open Ast ", " open Ast %}")
    );
}

#[test]
fn percent_elsewhere_is_ordinary() {
    assert_eq!(code("a % b}"), (true, "a % b", "a % b}"));
}

#[test]
fn quoted_string_with_stray_brace() {
    let (closed, token, consumed) = code("let x = {id|a } b|id} in x %}");
    assert!(closed);
    assert_eq!(token, "let x = {id|a } b|id} in x ");
    assert_eq!(consumed, "let x = {id|a } b|id} in x %}");
}

#[test]
fn nested_braces_balance() {
    let source = " { a = { b = 1 } } }tail";
    assert_eq!(
        code(source),
        (true, " { a = { b = 1 } } ", " { a = { b = 1 } } }")
    );
}

#[test]
fn nested_block_right_before_close_is_included() {
    assert_eq!(code("x {y}} z"), (true, "x {y}", "x {y}}"));
}

#[test]
fn braces_in_strings_and_chars_are_ignored() {
    let source = " f \"}\" '}' '{' }";
    let (closed, token, _) = code(source);
    assert!(closed);
    assert_eq!(token, " f \"}\" '}' '{' ");
}

#[test]
fn braces_in_comments_are_ignored() {
    let (closed, token, _) = code(" (* } *) g }");
    assert!(closed);
    assert_eq!(token, " (* } *) g ");
}

#[test]
fn type_variables_do_not_swallow_code() {
    let (closed, token, _) = code(" (x : 'a list) }");
    assert!(closed);
    assert_eq!(token, " (x : 'a list) ");
}

#[test]
fn primes_in_identifiers() {
    let (closed, token, _) = code(" x' + y'' }");
    assert!(closed);
    assert_eq!(token, " x' + y'' ");
}

#[test]
fn unterminated_block_fails() {
    let (closed, _, consumed) = code(" let x = { y ");
    assert!(!closed);
    assert_eq!(consumed, " let x = { y ");
}

#[test]
fn empty_block() {
    assert_eq!(code("}"), (true, "", "}"));
}

#[test]
fn unclosed_char_at_closing_brace_keeps_the_quote() {
    assert_eq!(code(" f '} rest"), (true, " f '", " f '}"));
}
