use super::*;
use pretty_assertions::assert_eq;

#[test]
fn repr_u8_matches_externals_order() {
    assert_eq!(TokenKind::Comment as u8, 0);
    assert_eq!(TokenKind::StringDelimiter as u8, 1);
    assert_eq!(TokenKind::EmbeddedCode as u8, 2);
    assert_eq!(TokenKind::TypeExtent as u8, 3);
    assert_eq!(TokenKind::AttributeExtent as u8, 4);
}

#[test]
fn all_is_in_symbol_order() {
    for (index, kind) in TokenKind::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(kind.symbol()), index);
        assert_eq!(TokenKind::from_symbol(kind.symbol()), Some(kind));
    }
    assert_eq!(TokenKind::from_symbol(5), None);
    assert_eq!(TokenKind::from_symbol(u16::MAX), None);
}

#[test]
fn grammar_names() {
    let names: Vec<&str> = TokenKind::ALL.into_iter().map(TokenKind::name).collect();
    assert_eq!(
        names,
        vec!["ocaml_comment", "\"", "ocaml", "ocaml_type", "attribute_payload"]
    );
}

#[test]
fn flag_bits_follow_symbols() {
    assert_eq!(ValidTokens::from(TokenKind::Comment), ValidTokens::COMMENT);
    assert_eq!(
        ValidTokens::from(TokenKind::StringDelimiter),
        ValidTokens::STRING_DELIMITER
    );
    assert_eq!(
        ValidTokens::from(TokenKind::EmbeddedCode),
        ValidTokens::EMBEDDED_CODE
    );
    assert_eq!(ValidTokens::from(TokenKind::TypeExtent), ValidTokens::TYPE_EXTENT);
    assert_eq!(
        ValidTokens::from(TokenKind::AttributeExtent),
        ValidTokens::ATTRIBUTE_EXTENT
    );
}

#[test]
fn from_symbols_reads_host_array() {
    let valid = ValidTokens::from_symbols(&[true, false, true, false, false]);
    assert_eq!(valid, ValidTokens::COMMENT | ValidTokens::EMBEDDED_CODE);
    assert!(valid.contains_kind(TokenKind::Comment));
    assert!(!valid.contains_kind(TokenKind::TypeExtent));
}

#[test]
fn from_symbols_short_array_requests_nothing_more() {
    assert_eq!(ValidTokens::from_symbols(&[]), ValidTokens::empty());
    assert_eq!(
        ValidTokens::from_symbols(&[false, true]),
        ValidTokens::STRING_DELIMITER
    );
    // Extra trailing entries (error-recovery symbols) are ignored.
    assert_eq!(
        ValidTokens::from_symbols(&[true, true, true, true, true, true]),
        ValidTokens::all()
    );
}

#[test]
fn scanned_token_end() {
    let token = ScannedToken {
        kind: TokenKind::Comment,
        start: 3,
        len: 9,
    };
    assert_eq!(token.end(), 12);
}
