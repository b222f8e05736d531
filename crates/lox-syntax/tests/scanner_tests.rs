//! Scanner Integration Tests
//!
//! Exercises the public scanning API end to end: token sequences, line
//! tracking, error collection, and source reconstruction.

use lox_syntax::{LexError, Literal, Scanned, Span, TokenKind, scan};
use proptest::prelude::*;

fn kinds(scanned: &Scanned) -> Vec<TokenKind> {
    scanned.tokens.iter().map(|t| t.kind()).collect()
}

/// Checks that lexemes plus the text between them rebuild the source, and
/// that the skipped text holds nothing a token could have been made from.
fn assert_reconstructs(source: &str, scanned: &Scanned) {
    let mut rebuilt = String::new();
    let mut cursor = 0;

    for token in &scanned.tokens {
        let span = token.span();
        assert!(span.start >= cursor, "tokens overlap or go backwards");
        assert_eq!(&source[span.start..span.end], token.lexeme());

        rebuilt.push_str(&source[cursor..span.start]);
        rebuilt.push_str(token.lexeme());
        cursor = span.end;
    }
    rebuilt.push_str(&source[cursor..]);

    assert_eq!(rebuilt, source);
    assert_eq!(cursor, source.len(), "EOF must sit at the end of the source");
}

#[test]
fn test_empty_source_is_only_eof() {
    let scanned = scan("");
    assert_eq!(kinds(&scanned), vec![TokenKind::Eof]);
    assert_eq!(scanned.tokens[0].line(), 1);
    assert!(!scanned.had_error());
}

#[test]
fn test_bang_equal_is_one_token() {
    let scanned = scan("!=");
    assert_eq!(kinds(&scanned), vec![TokenKind::BangEqual, TokenKind::Eof]);
    assert_eq!(scanned.tokens[0].lexeme(), "!=");
}

#[test]
fn test_no_whitespace_needed_between_operands() {
    let scanned = scan("1+2");
    assert_eq!(
        kinds(&scanned),
        vec![
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Eof
        ]
    );
    assert_eq!(scanned.tokens[0].literal(), &Literal::Number(1.0));
    assert_eq!(scanned.tokens[2].literal(), &Literal::Number(2.0));
}

#[test]
fn test_unterminated_string_emits_no_token() {
    let scanned = scan("\"abc");
    assert_eq!(kinds(&scanned), vec![TokenKind::Eof]);

    let errors: Vec<_> = scanned.diagnostics.iter().collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error, LexError::UnterminatedString);
    assert_eq!(errors[0].to_string(), "[line 1] Error : Unterminated string.");
}

#[test]
fn test_comment_line_is_skipped() {
    let scanned = scan("// comment\n1");
    assert_eq!(kinds(&scanned), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(scanned.tokens[0].line(), 2);
    assert_eq!(scanned.tokens[0].literal(), &Literal::Number(1.0));
}

#[test]
fn test_forest_is_an_identifier() {
    let scanned = scan("forest");
    assert_eq!(kinds(&scanned), vec![TokenKind::Identifier, TokenKind::Eof]);
    assert_eq!(scanned.tokens[0].lexeme(), "forest");
}

#[test]
fn test_number_with_fraction() {
    let scanned = scan("12.5");
    assert_eq!(kinds(&scanned), vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(scanned.tokens[0].literal(), &Literal::Number(12.5));
}

#[test]
fn test_number_with_trailing_dot() {
    let scanned = scan("12.");
    assert_eq!(
        kinds(&scanned),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
    assert_eq!(scanned.tokens[0].literal(), &Literal::Number(12.0));
}

#[test]
fn test_error_lines_in_multi_line_input() {
    let source = "var a = 1;\nvar b = @;\n\nprint a # b;\n\"never closed\n";
    let scanned = scan(source);

    let reported: Vec<(usize, LexError)> = scanned
        .diagnostics
        .iter()
        .map(|d| (d.line, d.error.clone()))
        .collect();
    assert_eq!(
        reported,
        vec![
            (2, LexError::UnexpectedCharacter('@')),
            (4, LexError::UnexpectedCharacter('#')),
            (6, LexError::UnterminatedString),
        ]
    );
    assert_reconstructs(source, &scanned);
}

#[test]
fn test_all_errors_surface_in_one_pass() {
    let scanned = scan("@ $ ^ ?");
    assert_eq!(scanned.diagnostics.len(), 4);
    assert_eq!(kinds(&scanned), vec![TokenKind::Eof]);
}

#[test]
fn test_small_program() {
    let source = "fun add(a, b) {\n  return a + b; // sum\n}\nprint add(1, 2.5) >= 3;\n";
    let scanned = scan(source);
    assert!(!scanned.had_error());
    assert_eq!(
        kinds(&scanned),
        vec![
            TokenKind::Fun,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::Return,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Print,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Number,
            TokenKind::Comma,
            TokenKind::Number,
            TokenKind::RightParen,
            TokenKind::GreaterEqual,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );

    let lines: Vec<usize> = scanned.tokens.iter().map(|t| t.line()).collect();
    assert_eq!(lines[0], 1);
    assert_eq!(lines[8], 2);
    assert_eq!(lines[13], 3);
    assert_eq!(lines[14], 4);
    assert_eq!(scanned.tokens.last().map(|t| t.line()), Some(5));
    assert_reconstructs(source, &scanned);
}

#[test]
fn test_token_display_lines() {
    let rendered: Vec<String> = scan("var x = \"hi\";")
        .tokens
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "VAR var null",
            "IDENTIFIER x null",
            "EQUAL = null",
            "STRING \"hi\" hi",
            "SEMICOLON ; null",
            "EOF  null",
        ]
    );
}

#[test]
fn test_spans_index_the_source() {
    let scanned = scan("a  <= \"s\"");
    let spans: Vec<Span> = scanned.tokens.iter().map(|t| t.span()).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(3, 5),
            Span::new(6, 9),
            Span::new(9, 9)
        ]
    );
}

#[test]
fn test_independent_scans_do_not_share_errors() {
    let bad = scan("@");
    let good = scan("1");
    assert!(bad.had_error());
    assert!(!good.had_error());
}

fn lox_like_source() -> impl Strategy<Value = String> {
    let fixed = prop::sample::select(vec![
        "(", ")", "{", "}", ",", ".", "-", "+", ";", "*", "!", "=", "<", ">", "/", " ", "\n",
        "\t", "\"", "@",
    ])
    .prop_map(String::from);
    let pieces = prop_oneof![
        fixed,
        "[a-z]{1,6}",
        "[0-9]{1,4}",
        "[0-9]{1,3}\\.[0-9]{0,3}",
        "//[ a-z]{0,8}",
        "\"[ a-z\n]{0,8}\"",
    ];
    prop::collection::vec(pieces, 0..40).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_ends_with_single_eof(source in lox_like_source()) {
        let scanned = scan(&source);
        let eofs = scanned.tokens.iter().filter(|t| t.kind() == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(scanned.tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
    }

    #[test]
    fn prop_reconstructs_source(source in lox_like_source()) {
        let scanned = scan(&source);
        assert_reconstructs(&source, &scanned);
    }

    #[test]
    fn prop_eof_line_counts_newlines(source in lox_like_source()) {
        let scanned = scan(&source);
        let newlines = source.bytes().filter(|b| *b == b'\n').count();
        prop_assert_eq!(scanned.tokens.last().map(|t| t.line()), Some(newlines + 1));
    }

    #[test]
    fn prop_lines_never_decrease(source in "[ -~\n]{0,80}") {
        let scanned = scan(&source);
        let lines: Vec<usize> = scanned.tokens.iter().map(|t| t.line()).collect();
        prop_assert!(lines.windows(2).all(|w| w[0] <= w[1]));
        assert_reconstructs(&source, &scanned);
    }
}
