// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Operator scanning documentation.
//!
//! This module documents the operator scanning logic in `scanner.rs`.
//!
//! ## Single-Character Tokens
//!
//! `(` `)` `{` `}` `,` `.` `-` `+` `;` `*` map straight to a token kind.
//!
//! ## One or Two Character Operators
//!
//! | Token | Variants | Method |
//! |-------|----------|--------|
//! | `!` | `!`, `!=` | `scan_with_equal` |
//! | `=` | `=`, `==` | `scan_with_equal` |
//! | `<` | `<`, `<=` | `scan_with_equal` |
//! | `>` | `>`, `>=` | `scan_with_equal` |
//!
//! ## Maximal Munch
//!
//! After the first character the scanner looks exactly one character
//! ahead. If it is `=` it is consumed and the two-character kind wins:
//!
//! ```text
//! // For input "!="
//! scan_with_equal(Bang, BangEqual):
//!   next_is('=') -> true, '=' consumed
//!   return BangEqual
//! ```
//!
//! Lookahead at end of input simply fails, so `"!"` alone is `Bang`.
//!
//! ## Comment Handling
//!
//! The `/` character can start:
//! - Division: `a / b`
//! - Line comment: `// comment`
//!
//! A line comment is consumed up to (not including) the next newline and
//! produces no token. There are no block comments.

// This module serves as documentation. The actual implementation is in scanner.rs.

#[cfg(test)]
mod tests {
    use crate::lexer::{Scanner, TokenKind};

    fn scan_kinds(src: &str) -> Vec<TokenKind> {
        Scanner::new(src)
            .scan_tokens()
            .tokens
            .iter()
            .map(|t| t.kind())
            .filter(|k| *k != TokenKind::Eof)
            .collect()
    }

    fn scan_single(src: &str) -> TokenKind {
        let kinds = scan_kinds(src);
        assert_eq!(kinds.len(), 1, "expected one token for {src:?}, got {kinds:?}");
        kinds[0]
    }

    #[test]
    fn test_bang_operators() {
        assert_eq!(scan_single("!"), TokenKind::Bang);
        assert_eq!(scan_single("!="), TokenKind::BangEqual);
    }

    #[test]
    fn test_equal_operators() {
        assert_eq!(scan_single("="), TokenKind::Equal);
        assert_eq!(scan_single("=="), TokenKind::EqualEqual);
    }

    #[test]
    fn test_less_operators() {
        assert_eq!(scan_single("<"), TokenKind::Less);
        assert_eq!(scan_single("<="), TokenKind::LessEqual);
    }

    #[test]
    fn test_greater_operators() {
        assert_eq!(scan_single(">"), TokenKind::Greater);
        assert_eq!(scan_single(">="), TokenKind::GreaterEqual);
    }

    #[test]
    fn test_slash() {
        assert_eq!(scan_single("/"), TokenKind::Slash);
    }

    #[test]
    fn test_triple_equal_splits() {
        assert_eq!(
            scan_kinds("==="),
            vec![TokenKind::EqualEqual, TokenKind::Equal]
        );
    }

    #[test]
    fn test_separated_operators_do_not_merge() {
        assert_eq!(scan_kinds("! ="), vec![TokenKind::Bang, TokenKind::Equal]);
        assert_eq!(scan_kinds("< ="), vec![TokenKind::Less, TokenKind::Equal]);
    }

    #[test]
    fn test_chained_comparisons() {
        assert_eq!(
            scan_kinds("<=>=!==="),
            vec![
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
            ]
        );
    }

    #[test]
    fn test_comment_swallows_operators() {
        assert_eq!(scan_kinds("+ // - * /"), vec![TokenKind::Plus]);
    }

    #[test]
    fn test_comment_then_next_line() {
        assert_eq!(
            scan_kinds("// a\n/"),
            vec![TokenKind::Slash]
        );
    }

    #[test]
    fn test_operators_without_whitespace() {
        assert_eq!(
            scan_kinds("1+2"),
            vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]
        );
        assert_eq!(
            scan_kinds("a.b;"),
            vec![
                TokenKind::Identifier,
                TokenKind::Dot,
                TokenKind::Identifier,
                TokenKind::Semicolon
            ]
        );
    }
}
