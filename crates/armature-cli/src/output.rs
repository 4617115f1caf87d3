//! Output management and formatting.
//!
//! Human and plain formats print status lines; the JSON format keeps stdout
//! for a single document and drops everything else except errors.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto becomes Human on a TTY and Plain when piped.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    fn silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }

    /// `<symbol> <msg>`, painted unless color is off.
    fn status(&self, symbol: &str, msg: &str, paint: fn(&str) -> String) -> String {
        if self.no_color {
            format!("{symbol} {msg}")
        } else {
            paint(&format!("{symbol} {msg}"))
        }
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        if self.silent() {
            return Ok(());
        }
        self.term.write_line(line)
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON modes.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.status("\u{2713}", msg, |s| s.green().bold().to_string()))
    }

    /// Goes to stderr and is never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        Term::stderr().write_line(&self.status("\u{2717}", msg, |s| s.red().bold().to_string()))
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(&self.status("\u{26a0}", msg, |s| s.yellow().to_string()))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.no_color {
            self.emit(text)
        } else {
            self.emit(&text.cyan().bold().to_string())
        }
    }

    /// Aligned `label  value` line used by the project summary.
    pub fn field(&self, label: &str, value: &str) -> io::Result<()> {
        let label = format!("{label:<16}");
        if self.no_color {
            self.emit(&format!("  {label}{value}"))
        } else {
            self.emit(&format!("  {}{}", label.dimmed(), value.bold()))
        }
    }

    /// Pretty JSON document on stdout. Only emitted in JSON mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.resolved_format != OutputFormat::Json {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
