// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lexical analysis (tokenization) for Lox source code.
//!
//! The lexer transforms Lox source text into a list of tokens that can be
//! consumed by a parser.
//!
//! ## Structure
//!
//! - `scanner.rs` - Main `Scanner` struct that produces tokens
//! - `token.rs` - `Token`, `TokenKind` and `Literal` definitions
//! - `keywords.rs` - Reserved words and character classes
//!
//! ## Documentation Submodules
//!
//! - `operators` - One and two character operators, comments
//! - `literals` - Number, string, and identifier literals
//!
//! ## Usage
//!
//! ```rust
//! use lox_syntax::lexer::{Scanner, TokenKind};
//!
//! let scanned = Scanner::new("var x = 42;").scan_tokens();
//!
//! assert!(!scanned.had_error());
//! for token in &scanned.tokens {
//!     println!("{token}");
//! }
//! assert_eq!(scanned.tokens.last().map(|t| t.kind()), Some(TokenKind::Eof));
//! ```

mod keywords;
mod scanner;
mod token;

// Documentation and test submodules
pub mod literals;
pub mod operators;

pub use keywords::{KEYWORDS, is_alpha, is_alphanumeric, is_digit, keyword};
pub use scanner::{Scanned, Scanner};
pub use token::{Literal, Span, Token, TokenKind};

/// Scans `source` to completion.
pub fn scan(source: &str) -> Scanned {
    Scanner::new(source).scan_tokens()
}
