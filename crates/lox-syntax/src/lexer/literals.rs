// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Literal scanning documentation.
//!
//! This module documents the literal scanning logic in `scanner.rs`.
//!
//! ## Numeric Literals
//!
//! Method: `scan_number`
//!
//! ```text
//! 42     -> Number(42.0)
//! 12.5   -> Number(12.5)
//! 12.    -> Number(12.0), Dot
//! .5     -> Dot, Number(5.0)
//! 1.2.3  -> Number(1.2), Dot, Number(3.0)
//! ```
//!
//! A fractional part is only taken when the `.` is followed by a digit.
//! There are no exponents, separators, or alternate bases.
//!
//! ## String Literals
//!
//! Method: `scan_string`
//!
//! - Double quotes only.
//! - No escape sequences: the payload is the raw text between the quotes.
//! - Strings may span lines; each newline advances the line counter and
//!   the token reports the line of its closing quote.
//! - Reaching end of input first reports `Unterminated string.` and
//!   produces no token.
//!
//! ## Identifiers and Keywords
//!
//! Method: `scan_identifier`
//!
//! - Start: `A-Z`, `a-z`
//! - Continue: start chars + `0-9`
//!
//! The keyword table is consulted only after the maximal run is consumed:
//!
//! ```text
//! "for"    -> TokenKind::For
//! "forest" -> TokenKind::Identifier
//! ```

// This module serves as documentation. The actual implementation is in scanner.rs.
