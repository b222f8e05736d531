// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Error types for the lox driver.

use rustyline::error::ReadlineError;
use std::path::PathBuf;
use thiserror::Error;

/// Command line usage error.
pub const EX_USAGE: u8 = 64;
/// The script had lexical errors.
pub const EX_DATAERR: u8 = 65;
/// The script could not be read.
pub const EX_NOINPUT: u8 = 66;
/// Internal failure, e.g. the line editor broke.
pub const EX_SOFTWARE: u8 = 70;

/// Result type for driver operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that abort a run. Lexical errors are not among them.
#[derive(Error, Debug)]
pub enum CliError {
    /// The script file could not be read
    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line editor failed
    #[error("line editor error: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Io { .. } => EX_NOINPUT,
            CliError::Readline(_) => EX_SOFTWARE,
        }
    }
}
