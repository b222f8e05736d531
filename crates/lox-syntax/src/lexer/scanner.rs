// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! The scanner that produces tokens from source text.

use tracing::{debug, trace};

use super::keywords::{is_alpha, is_alphanumeric, is_digit, keyword};
use super::{Literal, Span, Token, TokenKind};
use crate::diagnostics::{Diagnostics, LexError};

/// The output of one scan: every token plus the errors reported on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned {
    /// Tokens in source order, always terminated by a single `Eof`
    pub tokens: Vec<Token>,
    /// Lexical errors, in the order they were found
    pub diagnostics: Diagnostics,
}

impl Scanned {
    /// True if any lexical error was reported.
    pub fn had_error(&self) -> bool {
        self.diagnostics.had_error()
    }
}

/// A scanner that tokenizes Lox source code.
///
/// A scanner is consumed by [`Scanner::scan_tokens`]; the cursor state
/// lives and dies with one scan.
pub struct Scanner<'a> {
    source: &'a str,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
    /// Byte offset of the first character of the current lexeme
    start: usize,
    /// Byte offset of the next unread character
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the whole source.
    pub fn scan_tokens(mut self) -> Scanned {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        let end = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            Literal::None,
            self.line,
            Span::new(end, end),
        ));

        debug!(
            tokens = self.tokens.len(),
            errors = self.diagnostics.len(),
            lines = self.line,
            "scan complete"
        );

        Scanned {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn scan_token(&mut self) {
        let Some(ch) = self.advance() else {
            return;
        };

        match ch {
            // Single-character tokens
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One or two character tokens
            '!' => self.scan_with_equal(TokenKind::Bang, TokenKind::BangEqual),
            '=' => self.scan_with_equal(TokenKind::Equal, TokenKind::EqualEqual),
            '<' => self.scan_with_equal(TokenKind::Less, TokenKind::LessEqual),
            '>' => self.scan_with_equal(TokenKind::Greater, TokenKind::GreaterEqual),

            '/' => self.scan_slash(),

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(),

            _ if is_digit(ch) => self.scan_number(),
            _ if is_alpha(ch) => self.scan_identifier(),

            _ => self.diagnostics.error(
                self.line,
                Span::new(self.start, self.current),
                LexError::UnexpectedCharacter(ch),
            ),
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.source[self.current..].chars().next()?;
        self.current += ch.len_utf8();
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    /// Consumes the next character only if it is `expected`.
    fn next_is(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal_token(kind, Literal::None);
    }

    fn add_literal_token(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = &self.source[self.start..self.current];
        trace!(%kind, lexeme, line = self.line, "token");
        self.tokens.push(Token::new(
            kind,
            lexeme,
            literal,
            self.line,
            Span::new(self.start, self.current),
        ));
    }

    fn scan_with_equal(&mut self, single: TokenKind, double: TokenKind) {
        let kind = if self.next_is('=') { double } else { single };
        self.add_token(kind);
    }

    fn scan_slash(&mut self) {
        if self.next_is('/') {
            // Line comment: runs up to, not including, the newline
            while self.peek().is_some_and(|ch| ch != '\n') {
                self.advance();
            }
        } else {
            self.add_token(TokenKind::Slash);
        }
    }

    fn scan_string(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '"' {
                break;
            }
            if ch == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.diagnostics.error(
                self.line,
                Span::new(self.start, self.current),
                LexError::UnterminatedString,
            );
            return;
        }

        // The closing quote
        self.advance();

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal_token(TokenKind::String, Literal::Text(value.to_string()));
    }

    fn scan_number(&mut self) {
        self.consume_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(is_digit) {
            self.advance();
            self.consume_digits();
        }

        let value = self.source[self.start..self.current]
            .parse::<f64>()
            .unwrap_or(f64::NAN);
        self.add_literal_token(TokenKind::Number, Literal::Number(value));
    }

    fn consume_digits(&mut self) {
        while self.peek().is_some_and(is_digit) {
            self.advance();
        }
    }

    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let text = &self.source[self.start..self.current];
        self.add_token(keyword(text).unwrap_or(TokenKind::Identifier));
    }
}
