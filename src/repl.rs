// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL (Read-Eval-Print Loop) for the Lox front end.
//!
//! Every entry is scanned on its own, so an error in one entry never
//! affects the next.

use lox_syntax::{KEYWORDS, Token, TokenKind};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{CliError, Result};
use crate::output;

/// REPL configuration constants
const HISTORY_FILE: &str = ".lox_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Scan a Lox file and print its tokens"),
        ]
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
struct LoxHelper {
    /// Keywords and REPL commands for completion
    words: Vec<String>,
}

impl LoxHelper {
    fn new() -> Self {
        let words = KEYWORDS
            .iter()
            .map(|(text, _)| *text)
            .chain([".help", ".exit", ".clear", ".version", ".load"])
            .map(String::from)
            .collect();

        Self { words }
    }
}

/// Start of the word that ends at `pos`. Always a char boundary.
fn word_start(line: &str, pos: usize) -> usize {
    line[..pos]
        .char_indices()
        .rev()
        .find(|&(_, c)| !c.is_ascii_alphanumeric() && c != '.')
        .map_or(0, |(i, c)| i + c.len_utf8())
}

impl Completer for LoxHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(line, pos)..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .words
            .iter()
            .filter(|w| w.starts_with(word))
            .map(|w| Pair {
                display: w.clone(),
                replacement: w[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LoxHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line, pos)..];
        if word.len() < 2 {
            return None;
        }

        self.words
            .iter()
            .find(|w| w.starts_with(word) && w.len() > word.len())
            .map(|w| w[word.len()..].to_string().dimmed().to_string())
    }
}

impl Highlighter for LoxHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }

        // Color by real token kind; text between tokens is copied as-is.
        let scanned = lox_syntax::scan(line);
        let mut result = String::with_capacity(line.len() * 2);
        let mut cursor = 0;

        for token in &scanned.tokens {
            let span = token.span();
            result.push_str(&line[cursor..span.start]);
            result.push_str(&highlight_token(token));
            cursor = span.end;
        }
        result.push_str(&line[cursor..]);

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

fn highlight_token(token: &Token) -> String {
    let lexeme = token.lexeme();
    match token.kind() {
        TokenKind::True | TokenKind::False | TokenKind::Nil | TokenKind::This => {
            lexeme.blue().to_string()
        }
        kind if kind.is_keyword() => lexeme.magenta().bold().to_string(),
        TokenKind::String => lexeme.green().to_string(),
        TokenKind::Number => lexeme.yellow().to_string(),
        TokenKind::LeftParen | TokenKind::RightParen | TokenKind::LeftBrace | TokenKind::RightBrace => {
            lexeme.yellow().to_string()
        }
        kind if kind.is_operator() => lexeme.cyan().to_string(),
        _ => lexeme.to_string(),
    }
}

impl Validator for LoxHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        if is_balanced(ctx.input()) {
            Ok(ValidationResult::Valid(None))
        } else {
            Ok(ValidationResult::Incomplete)
        }
    }
}

/// Check that no string literal, parenthesis or brace is left open
fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    let mut in_string = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_string {
            in_string = c != '"';
            continue;
        }

        match c {
            '"' => in_string = true,
            '/' if chars.peek() == Some(&'/') => {
                // Line comment
                while chars.peek().is_some_and(|&c| c != '\n') {
                    chars.next();
                }
            }
            '(' => stack.push(')'),
            '{' => stack.push('}'),
            ')' | '}' => {
                if stack.pop() != Some(c) {
                    return true; // Mismatched; let the scan run and show the tokens
                }
            }
            _ => {}
        }
    }

    stack.is_empty() && !in_string
}

impl Helper for LoxHelper {}

/// The interactive REPL for the Lox front end
pub struct Repl {
    editor: Editor<LoxHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(history_path: Option<PathBuf>) -> Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LoxHelper::new()));

        let history_path = history_path.unwrap_or_else(default_history_path);

        // Create parent directory if it doesn't exist
        if let Some(parent) = history_path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "cannot create history directory");
            }
        }

        if let Err(e) = editor.load_history(&history_path) {
            debug!(path = %history_path.display(), error = %e, "no history loaded");
        }

        Ok(Self {
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", ">".bright_green().bold());

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    // Check for REPL commands
                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    scan_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    break;
                }
                Err(err) => {
                    self.save_history();
                    return Err(CliError::from(err));
                }
            }
        }

        self.save_history();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Err(e) = self.editor.save_history(&self.history_path) {
            warn!(path = %self.history_path.display(), error = %e, "cannot save history");
        }
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!(
            "  {} {} {}",
            "Lox".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => {
                self.print_help();
                CommandResult::Continue
            }
            ReplCommand::Exit => CommandResult::Exit,
            ReplCommand::Clear => {
                print!("\x1B[2J\x1B[H");
                CommandResult::Continue
            }
            ReplCommand::Version => {
                println!(
                    "{}: {}",
                    "Lox".bright_cyan().bold(),
                    env!("CARGO_PKG_VERSION").yellow()
                );
                CommandResult::Continue
            }
            ReplCommand::Load => {
                if let Some(path) = arg {
                    load_file(Path::new(path));
                } else {
                    eprintln!(
                        "{}: {} {}",
                        "Error".red().bold(),
                        ".load".cyan(),
                        "requires a file path".dimmed()
                    );
                }
                CommandResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:16} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:16} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:16} {}", "Tab".yellow(), "Autocomplete".dimmed());
        println!();
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

fn default_history_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("lox")
        .join(HISTORY_FILE)
}

fn scan_and_print(source: &str) {
    let scanned = lox_syntax::scan(source);
    output::print_scanned(source, &scanned);
}

fn load_file(path: &Path) {
    match std::fs::read_to_string(path) {
        Ok(source) => scan_and_print(&source),
        Err(source) => {
            let err = CliError::Io {
                path: path.to_path_buf(),
                source,
            };
            eprintln!("{}: {}", "Error".red().bold(), err);
        }
    }
}
