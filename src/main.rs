// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Lox - the lexical front end of the Lox scripting language
//!
//! This is the main entry point for the lox CLI/REPL.
//!
//! ## Modes
//!
//! - No arguments: interactive REPL with highlighting and history
//! - One argument: scan a script file and print its tokens
//! - More arguments: usage error (exit code 64)

mod cli;
mod error;
mod output;
mod repl;

use clap::Parser;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Mode, USAGE};
use error::{CliError, EX_DATAERR, EX_USAGE};

/// Main entry point - uses tokio runtime for file I/O.
#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.mode() {
        Mode::Repl => run_repl(&cli),
        Mode::Script(path) => run_file(&path).await,
        Mode::Usage => {
            println!("{USAGE}");
            ExitCode::from(EX_USAGE)
        }
    }
}

/// Logs go to stderr so token listings on stdout stay clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Start the interactive REPL
fn run_repl(cli: &Cli) -> ExitCode {
    let result = repl::Repl::new(cli.history.clone()).and_then(|mut repl| repl.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {}", "REPL Error".red().bold(), e);
            ExitCode::from(e.exit_code())
        }
    }
}

/// Scan a script file and print its tokens.
async fn run_file(path: &Path) -> ExitCode {
    let source = match read_source(path).await {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            return ExitCode::from(e.exit_code());
        }
    };

    info!(path = %path.display(), bytes = source.len(), "scanning script");
    let scanned = lox_syntax::scan(&source);
    output::print_scanned(&source, &scanned);

    if scanned.had_error() {
        debug!(errors = scanned.diagnostics.len(), "script had lexical errors");
        ExitCode::from(EX_DATAERR)
    } else {
        ExitCode::SUCCESS
    }
}

async fn read_source(path: &Path) -> error::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })
}
