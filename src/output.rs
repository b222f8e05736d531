// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Printing scan results.
//!
//! Tokens go to stdout one per line in their `Display` form. Diagnostics go
//! to stderr in the `[line N] Error : message` form, followed by the
//! offending source line with a caret under the error.

use lox_syntax::{Diagnostic, Scanned, Span};
use owo_colors::OwoColorize;

/// Prints every token, then every diagnostic.
pub fn print_scanned(source: &str, scanned: &Scanned) {
    for token in &scanned.tokens {
        println!("{token}");
    }
    for diagnostic in &scanned.diagnostics {
        print_diagnostic(source, diagnostic);
    }
}

/// Prints one diagnostic with a source excerpt.
pub fn print_diagnostic(source: &str, diagnostic: &Diagnostic) {
    eprintln!("{}", diagnostic.to_string().red().bold());
    if let Some(excerpt) = excerpt(source, diagnostic.span) {
        eprintln!("{}", excerpt.dimmed());
    }
}

/// The source line containing `span.start`, with a caret line beneath it.
fn excerpt(source: &str, span: Span) -> Option<String> {
    if span.start > source.len() || !source.is_char_boundary(span.start) {
        return None;
    }

    let line_start = source[..span.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[span.start..]
        .find('\n')
        .map_or(source.len(), |i| span.start + i);
    let text = source[line_start..line_end].trim_end_matches('\r');
    if text.trim().is_empty() {
        return None;
    }

    let column = source[line_start..span.start].chars().count();
    let width = source[span.start..span.end.min(line_end)]
        .chars()
        .count()
        .max(1);

    Some(format!(
        "    {text}\n    {}{}",
        " ".repeat(column),
        "^".repeat(width)
    ))
}
