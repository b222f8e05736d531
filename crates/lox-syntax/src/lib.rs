// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! # lox-syntax
//!
//! The lexical front end of the Lox scripting language.
//!
//! ## Overview
//!
//! This crate provides:
//! - The token model (`Token`, `TokenKind`, `Literal`)
//! - A maximal-munch scanner producing a complete token list
//! - Non-fatal error collection (`Diagnostics`)
//! - The expression tree shape a parser will build
//! - Parallel scanning of independent sources (`parallel` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use lox_syntax::{TokenKind, scan};
//!
//! let scanned = scan("1 + 2");
//! let kinds: Vec<_> = scanned.tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod diagnostics;
pub mod lexer;

#[cfg(feature = "parallel")]
mod batch;

// Re-exports for convenience
#[cfg(feature = "parallel")]
pub use batch::scan_batch;
pub use diagnostics::{Diagnostic, Diagnostics, LexError};
pub use lexer::{KEYWORDS, Literal, Scanned, Scanner, Span, Token, TokenKind, scan};
