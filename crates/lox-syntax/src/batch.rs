// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Parallel scanning of independent sources.
//!
//! Every source gets its own [`Scanner`] and its own diagnostics; only the
//! read-only keyword table is shared between threads.

use rayon::prelude::*;
use tracing::debug;

use crate::lexer::{Scanned, Scanner};

/// Scans every source in parallel. Output order matches input order.
pub fn scan_batch<S>(sources: &[S]) -> Vec<Scanned>
where
    S: AsRef<str> + Sync,
{
    debug!(sources = sources.len(), "scanning batch");
    sources
        .par_iter()
        .map(|source| Scanner::new(source.as_ref()).scan_tokens())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{TokenKind, scan};

    #[test]
    fn test_batch_matches_sequential() {
        let sources = vec![
            "var a = 1;".to_string(),
            "print \"hi\";".to_string(),
            "@".to_string(),
            String::new(),
        ];
        let batch = scan_batch(&sources);
        assert_eq!(batch.len(), sources.len());
        for (scanned, source) in batch.iter().zip(&sources) {
            assert_eq!(scanned, &scan(source));
        }
    }

    #[test]
    fn test_errors_stay_with_their_source() {
        let batch = scan_batch(&["\"open", "fine", "#"]);
        assert!(batch[0].had_error());
        assert!(!batch[1].had_error());
        assert!(batch[2].had_error());
        assert_eq!(batch[1].tokens[0].kind(), TokenKind::Identifier);
    }

    #[test]
    fn test_empty_batch() {
        let sources: [&str; 0] = [];
        assert!(scan_batch(&sources).is_empty());
    }
}
