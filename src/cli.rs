// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! CLI argument parsing for lox.

use clap::Parser;
use std::path::PathBuf;

/// Usage line printed when too many scripts are given.
pub const USAGE: &str = "Usage: lox [script]";

/// lox - scan Lox source into tokens
#[derive(Parser, Debug)]
#[command(name = "lox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Script to scan; starts the REPL when omitted. Put `--` before a
    /// script name that starts with `-`
    #[arg(value_name = "SCRIPT")]
    pub scripts: Vec<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// REPL history file
    #[arg(long, value_name = "PATH", env = "LOX_HISTORY")]
    pub history: Option<PathBuf>,
}

/// What the driver should do with the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Interactive prompt
    Repl,
    /// Scan one script file
    Script(PathBuf),
    /// Wrong number of scripts
    Usage,
}

impl Cli {
    /// Picks the run mode from the number of positional arguments.
    pub fn mode(&self) -> Mode {
        match self.scripts.as_slice() {
            [] => Mode::Repl,
            [path] => Mode::Script(path.clone()),
            _ => Mode::Usage,
        }
    }
}
