//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::address::RangeAddress;
use crate::lexer::Lexer;
use crate::parser::parse;
use crate::token::Token;

// ========================================
// LEXER TESTS
// ========================================

#[test]
fn test_exclamation_token() {
    let mut lexer = Lexer::new("Sheet1!A1");
    assert_eq!(lexer.next_token(), Token::Identifier("Sheet1".to_string()));
    assert_eq!(lexer.next_token(), Token::Exclamation);
    assert_eq!(lexer.next_token(), Token::Identifier("A1".to_string()));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn test_quoted_identifier() {
    let mut lexer = Lexer::new("'Quali Schedule'!A1");
    assert_eq!(
        lexer.next_token(),
        Token::QuotedIdentifier("Quali Schedule".to_string())
    );
    assert_eq!(lexer.next_token(), Token::Exclamation);
    assert_eq!(lexer.next_token(), Token::Identifier("A1".to_string()));
}

#[test]
fn test_quoted_identifier_with_escaped_quote() {
    let mut lexer = Lexer::new("'John''s Sheet'!A1");
    assert_eq!(
        lexer.next_token(),
        Token::QuotedIdentifier("John's Sheet".to_string())
    );
    assert_eq!(lexer.next_token(), Token::Exclamation);
}

#[test]
fn lexer_tokenizes_ranges() {
    let mut lexer = Lexer::new("B3:D10");
    assert_eq!(lexer.next_token(), Token::Identifier("B3".to_string()));
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Identifier("D10".to_string()));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_tokenizes_row_ranges() {
    let mut lexer = Lexer::new("2:4");
    assert_eq!(lexer.next_token(), Token::Number(2));
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Number(4));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_skips_whitespace() {
    let mut lexer = Lexer::new("  B3 : D ");
    assert_eq!(lexer.next_token(), Token::Identifier("B3".to_string()));
    assert_eq!(lexer.next_token(), Token::Colon);
    assert_eq!(lexer.next_token(), Token::Identifier("D".to_string()));
    assert_eq!(lexer.next_token(), Token::EOF);
}

#[test]
fn lexer_preserves_identifier_case() {
    let mut lexer = Lexer::new("Qualifiers!b3");
    assert_eq!(
        lexer.next_token(),
        Token::Identifier("Qualifiers".to_string())
    );
    assert_eq!(lexer.next_token(), Token::Exclamation);
    assert_eq!(lexer.next_token(), Token::Identifier("b3".to_string()));
}

#[test]
fn lexer_flags_illegal_characters() {
    let mut lexer = Lexer::new("B3;D4");
    assert_eq!(lexer.next_token(), Token::Identifier("B3".to_string()));
    assert_eq!(lexer.next_token(), Token::Illegal(';'));
}

// ========================================
// PARSER TESTS - SINGLE CELLS
// ========================================

#[test]
fn parser_parses_single_cell() {
    let addr = parse("A1").unwrap();
    assert_eq!(addr, RangeAddress::cell(0, 0));
}

#[test]
fn parser_parses_multi_letter_column_cell() {
    let addr = parse("AA100").unwrap();
    assert_eq!(addr, RangeAddress::cell(26, 99));
}

#[test]
fn parser_accepts_lowercase_columns() {
    assert_eq!(parse("b3").unwrap(), RangeAddress::cell(1, 2));
}

// ========================================
// PARSER TESTS - RECTANGLES
// ========================================

#[test]
fn parser_parses_bounded_rectangle() {
    let addr = parse("A1:C10").unwrap();
    assert_eq!(addr, RangeAddress::rect(0, 0, 2, 9));
}

#[test]
fn parser_normalizes_reversed_rectangle() {
    assert_eq!(parse("C10:A1").unwrap(), parse("A1:C10").unwrap());
}

#[test]
fn parser_parses_column_only_range() {
    let addr = parse("B:D").unwrap();
    assert_eq!(addr.start_col, Some(1));
    assert_eq!(addr.end_col, Some(3));
    assert_eq!(addr.start_row, None);
    assert_eq!(addr.end_row, None);
}

#[test]
fn parser_parses_row_only_range() {
    let addr = parse("2:4").unwrap();
    assert_eq!(addr.start_row, Some(1));
    assert_eq!(addr.end_row, Some(3));
    assert_eq!(addr.start_col, None);
    assert_eq!(addr.end_col, None);
}

#[test]
fn parser_parses_half_open_end_row() {
    // "B3:D" - row 3 down to the worksheet extent
    let addr = parse("B3:D").unwrap();
    assert_eq!(addr.start_col, Some(1));
    assert_eq!(addr.start_row, Some(2));
    assert_eq!(addr.end_col, Some(3));
    assert_eq!(addr.end_row, None);
}

#[test]
fn parser_parses_half_open_start_row() {
    // "B:D3" - worksheet start down to row 3
    let addr = parse("B:D3").unwrap();
    assert_eq!(addr.start_col, Some(1));
    assert_eq!(addr.start_row, None);
    assert_eq!(addr.end_col, Some(3));
    assert_eq!(addr.end_row, Some(2));
}

// ========================================
// PARSER TESTS - SHEET QUALIFIERS
// ========================================

#[test]
fn parser_parses_sheet_qualifier() {
    let addr = parse("Sheet1!A1:C10").unwrap();
    assert_eq!(addr.sheet.as_deref(), Some("Sheet1"));
    assert_eq!(addr.start_col, Some(0));
    assert_eq!(addr.end_col, Some(2));
}

#[test]
fn parser_parses_quoted_sheet_qualifier() {
    let addr = parse("'Quali Schedule'!B2:D4").unwrap();
    assert_eq!(addr.sheet.as_deref(), Some("Quali Schedule"));
}

#[test]
fn parser_preserves_sheet_name_case() {
    let addr = parse("Lobbies!A1").unwrap();
    assert_eq!(addr.sheet.as_deref(), Some("Lobbies"));
}

#[test]
fn parser_parses_sheet_qualified_column_range() {
    let addr = parse("Lobbies!B:D").unwrap();
    assert_eq!(addr.sheet.as_deref(), Some("Lobbies"));
    assert_eq!(addr.start_col, Some(1));
    assert_eq!(addr.end_row, None);
}

// ========================================
// PARSER TESTS - REJECTIONS
// ========================================

#[test]
fn parser_rejects_empty_input() {
    assert!(parse("").is_err());
    assert!(parse("   ").is_err());
}

#[test]
fn parser_rejects_row_column_mix() {
    // The canonical malformed token from the address grammar.
    assert!(parse("1:A").is_err());
    assert!(parse("B:3").is_err());
    assert!(parse("2:D4").is_err());
    assert!(parse("B3:4").is_err());
}

#[test]
fn parser_rejects_lone_column_or_row() {
    assert!(parse("B").is_err());
    assert!(parse("3").is_err());
}

#[test]
fn parser_rejects_zero_row() {
    assert!(parse("A0").is_err());
    assert!(parse("0:4").is_err());
}

#[test]
fn parser_rejects_trailing_garbage() {
    assert!(parse("A1:C10 extra").is_err());
    assert!(parse("A1:").is_err());
    assert!(parse(":C10").is_err());
}

#[test]
fn parser_rejects_sheet_qualifier_without_address() {
    assert!(parse("Sheet1!").is_err());
}

#[test]
fn parser_rejects_unanchored_quoted_name() {
    assert!(parse("'Quali Schedule'").is_err());
}

#[test]
fn parser_rejects_malformed_identifiers() {
    assert!(parse("B3X:D4").is_err());
    assert!(parse("_x:B").is_err());
}

// ========================================
// DISPLAY ROUND-TRIP TESTS
// ========================================

#[test]
fn display_roundtrip_reproduces_rectangle() {
    for text in [
        "A1",
        "AA100",
        "A1:C10",
        "B:D",
        "2:4",
        "B3:D",
        "B:D3",
        "Sheet1!A1",
        "'Quali Schedule'!B2:D4",
        "'John''s Sheet'!A1:B2",
    ] {
        let parsed = parse(text).unwrap();
        let reparsed = parse(&parsed.to_string()).unwrap();
        assert_eq!(parsed, reparsed, "Round-trip failed for {:?}", text);
    }
}

#[test]
fn display_formats_canonical_text() {
    assert_eq!(parse("a1:c10").unwrap().to_string(), "A1:C10");
    assert_eq!(parse("B3").unwrap().to_string(), "B3");
    assert_eq!(
        parse("'Quali Schedule'!B:D").unwrap().to_string(),
        "'Quali Schedule'!B:D"
    );
}
