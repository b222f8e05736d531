// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error collection for the front end.
//!
//! Lexical errors never abort a scan. Each one is recorded as a
//! [`Diagnostic`] in a [`Diagnostics`] collector owned by that scan, so
//! independent scans cannot observe each other's errors.

use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::lexer::Span;

/// A lexical error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that cannot start any token
    #[error("Unexpected character: {0}")]
    UnexpectedCharacter(char),

    /// A string literal still open at end of input
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// One reported error, tied to the line where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line
    pub line: usize,
    /// Where on the line the error sits; empty for scanner errors
    pub location: String,
    /// Source range of the offending text
    pub span: Span,
    /// What went wrong
    pub error: LexError,
}

impl Diagnostic {
    /// Creates a scanner-level diagnostic with an empty location.
    pub fn new(line: usize, span: Span, error: LexError) -> Self {
        Self {
            line,
            location: String::new(),
            span,
            error,
        }
    }

    /// The human readable message.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error {}: {}",
            self.line, self.location, self.error
        )
    }
}

/// Collects diagnostics for one scan and tracks whether any were reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    reported: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        trace!(line = diagnostic.line, error = %diagnostic.error, "lexical error");
        self.reported.push(diagnostic);
    }

    /// Shorthand for reporting a scanner error.
    pub fn error(&mut self, line: usize, span: Span, error: LexError) {
        self.report(Diagnostic::new(line, span, error));
    }

    /// True once at least one diagnostic has been reported.
    pub fn had_error(&self) -> bool {
        !self.reported.is_empty()
    }

    /// Number of diagnostics reported.
    pub fn len(&self) -> usize {
        self.reported.len()
    }

    /// Returns true if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    /// Iterates over the diagnostics in report order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.reported.iter()
    }

    /// Forgets every reported diagnostic.
    pub fn clear(&mut self) {
        self.reported.clear();
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.reported.into_iter()
    }
}
