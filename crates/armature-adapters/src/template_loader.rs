//! SQL-style template source loader.
//!
//! Templates ship as `INSERT` statements so the same file can seed a real
//! database:
//!
//! ```sql
//! -- one record per statement; statements may span lines
//! INSERT INTO templates (project_name, file_path, content) VALUES
//!   ('common', 'LICENSE', 'Copyright (c) {{year}} {{author}}
//! Permission is hereby granted...');
//! ```
//!
//! Only the three quoted values matter: a logical group, the template key
//! (a project-relative path) and the raw content. `''` inside a value is an
//! escaped quote. `--` comments are ignored outside quotes.
//!
//! # Error policy
//!
//! A malformed statement never fails the load. It is skipped, logged at
//! `WARN` and reported as a [`TemplateSourceWarning`]. Only an unreadable
//! file or directory is an error.

use std::{
    collections::HashMap,
    fmt, fs,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use walkdir::WalkDir;

use armature_core::{
    application::ApplicationError,
    error::{ArmatureError, ArmatureResult},
};

const SOURCE_EXTENSION: &str = "sql";
const TARGET_TABLE: &str = "templates";
const EXPECTED_VALUES: usize = 3;

// ── Records and warnings ──────────────────────────────────────────────────────

/// One parsed `INSERT` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    /// Logical group (first value). Informational only.
    pub group: String,
    /// Template key, e.g. `README.md`.
    pub path: String,
    pub content: String,
    /// Where the statement came from (file path or `<builtin>`).
    pub origin: String,
    /// 1-based line the statement starts on.
    pub line: usize,
}

/// A statement that was skipped or overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSourceWarning {
    pub origin: String,
    pub line: usize,
    pub message: String,
}

impl fmt::Display for TemplateSourceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.origin, self.line, self.message)
    }
}

/// Everything read from one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTemplates {
    pub records: Vec<TemplateRecord>,
    pub warnings: Vec<TemplateSourceWarning>,
}

impl ParsedTemplates {
    fn warn(&mut self, origin: &str, line: usize, message: impl Into<String>) {
        let warning = TemplateSourceWarning {
            origin: origin.to_string(),
            line,
            message: message.into(),
        };
        warn!(origin = %warning.origin, line = warning.line, "{}", warning.message);
        self.warnings.push(warning);
    }

    /// Later records with the same key win; earlier ones are reported.
    fn flag_duplicates(&mut self) {
        let mut seen: HashMap<String, (String, usize)> = HashMap::new();
        let mut redefined = Vec::new();
        for record in &self.records {
            if let Some((origin, line)) = seen.insert(
                record.path.clone(),
                (record.origin.clone(), record.line),
            ) {
                redefined.push((
                    record.origin.clone(),
                    record.line,
                    format!(
                        "template '{}' redefined (previous definition at {}:{}); the later one wins",
                        record.path, origin, line
                    ),
                ));
            }
        }
        for (origin, line, message) in redefined {
            self.warn(&origin, line, message);
        }
    }
}

/// Why a statement or one of its rows was not loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unterminated quoted value")]
    UnterminatedQuote,
    #[error("missing VALUES (")]
    MissingValues,
    #[error("missing closing parenthesis")]
    MissingCloseParen,
    #[error("unexpected text after the value list")]
    TrailingText,
    #[error("unexpected '{0}' between values")]
    UnexpectedBetween(char),
    #[error("unexpected '{0}' after value")]
    UnexpectedAfterValue(char),
    #[error("expected 3 values, found {0}")]
    WrongArity(usize),
    #[error("empty template path")]
    EmptyPath,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse template statements from in-memory text.
pub fn parse_source(origin: &str, text: &str) -> ParsedTemplates {
    let mut parsed = ParsedTemplates::default();
    parse_into(origin, text, &mut parsed);
    parsed.flag_duplicates();
    parsed
}

/// Loads `*.sql` template sources from a file or a directory.
///
/// # Example
///
/// ```no_run
/// use armature_adapters::template_loader::SqlTemplateLoader;
///
/// let parsed = SqlTemplateLoader::new("./SQL").load()?;
/// println!("{} templates, {} warnings", parsed.records.len(), parsed.warnings.len());
/// # Ok::<(), armature_core::error::ArmatureError>(())
/// ```
pub struct SqlTemplateLoader {
    path: PathBuf,
}

impl SqlTemplateLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load a single file, or every `*.sql` file under a directory in sorted
    /// path order.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::TemplateSource`] if the path is missing or a file
    /// cannot be read.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> ArmatureResult<ParsedTemplates> {
        let files = if self.path.is_dir() {
            self.discover()?
        } else if self.path.is_file() {
            vec![self.path.clone()]
        } else {
            return Err(source_error(&self.path, "path does not exist"));
        };

        let mut parsed = ParsedTemplates::default();
        for file in &files {
            let text = fs::read_to_string(file).map_err(|e| source_error(file, e))?;
            debug!(file = %file.display(), bytes = text.len(), "parsing template source");
            parse_into(&file.display().to_string(), &text, &mut parsed);
        }
        parsed.flag_duplicates();

        info!(
            files = files.len(),
            records = parsed.records.len(),
            warnings = parsed.warnings.len(),
            "template source loaded"
        );
        Ok(parsed)
    }

    fn discover(&self) -> ArmatureResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.path).min_depth(1) {
            let entry = entry.map_err(|e| source_error(&self.path, e))?;
            let path = entry.path();
            if entry.file_type().is_file()
                && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION)
            {
                files.push(path.to_path_buf());
            }
        }
        files.sort();

        if files.is_empty() {
            warn!(dir = %self.path.display(), "no *.sql files found");
        }
        Ok(files)
    }
}

fn source_error(path: &Path, reason: impl fmt::Display) -> ArmatureError {
    ApplicationError::TemplateSource {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
    .into()
}

// ── Statement splitting ───────────────────────────────────────────────────────

struct Statement {
    line: usize,
    text: String,
    /// Source ended inside a quoted value.
    unterminated: bool,
}

#[derive(Clone, Copy)]
enum SplitState {
    Code,
    Comment,
    Quoted,
    QuoteSeen,
}

/// Split on `;` outside quotes, dropping `--` comments.
fn split_statements(text: &str) -> Vec<Statement> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut start_line = 1;
    let mut line = 1;
    let mut state = SplitState::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            SplitState::Code => match c {
                '-' if chars.peek() == Some(&'-') => {
                    chars.next();
                    state = SplitState::Comment;
                }
                ';' => {
                    if !current.trim().is_empty() {
                        statements.push(Statement {
                            line: start_line,
                            text: std::mem::take(&mut current),
                            unterminated: false,
                        });
                    }
                    current.clear();
                }
                _ => {
                    if current.trim().is_empty() && !c.is_whitespace() {
                        start_line = line;
                    }
                    if c == '\'' {
                        state = SplitState::Quoted;
                    }
                    current.push(c);
                }
            },
            SplitState::Comment => {
                if c == '\n' {
                    current.push(c);
                    state = SplitState::Code;
                }
            }
            SplitState::Quoted => {
                if c == '\'' {
                    state = SplitState::QuoteSeen;
                }
                current.push(c);
            }
            SplitState::QuoteSeen => {
                if c == '\'' {
                    // Doubled quote: still inside the value.
                    current.push(c);
                    state = SplitState::Quoted;
                } else if c == ';' {
                    state = SplitState::Code;
                    statements.push(Statement {
                        line: start_line,
                        text: std::mem::take(&mut current),
                        unterminated: false,
                    });
                } else {
                    state = SplitState::Code;
                    if c == '-' && chars.peek() == Some(&'-') {
                        chars.next();
                        state = SplitState::Comment;
                    } else {
                        current.push(c);
                    }
                }
            }
        }
        if c == '\n' {
            line += 1;
        }
    }

    if !current.trim().is_empty() {
        statements.push(Statement {
            line: start_line,
            text: current,
            unterminated: matches!(state, SplitState::Quoted),
        });
    }
    statements
}

// ── Statement parsing ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq)]
enum ValueState {
    Between,
    Inside,
    QuoteSeen,
    Closed,
}

fn parse_into(origin: &str, text: &str, out: &mut ParsedTemplates) {
    for statement in split_statements(text) {
        if statement.unterminated {
            out.warn(
                origin,
                statement.line,
                format!("{}; statement skipped", RecordError::UnterminatedQuote),
            );
            continue;
        }
        if !targets_template_table(&statement.text) {
            debug!(origin, line = statement.line, "ignoring non-template statement");
            continue;
        }
        let rows = match parse_rows(&statement.text) {
            Ok(rows) => rows,
            Err(reason) => {
                out.warn(origin, statement.line, format!("{reason}; statement skipped"));
                continue;
            }
        };
        for row in rows {
            let line = statement.line + row.line_offset;
            match row.values {
                Ok([_, path, _]) if path.trim().is_empty() => {
                    out.warn(origin, line, format!("{}; record skipped", RecordError::EmptyPath));
                }
                Ok([group, path, content]) => {
                    debug!(origin, line, key = %path, "loaded template");
                    out.records.push(TemplateRecord {
                        group,
                        path,
                        content,
                        origin: origin.to_string(),
                        line,
                    });
                }
                Err(reason) => out.warn(origin, line, format!("{reason}; record skipped")),
            }
        }
    }
}

/// `INSERT INTO templates ...`, case-insensitive, any whitespace.
fn targets_template_table(statement: &str) -> bool {
    let mut words = statement.split_whitespace();
    matches!(
        (words.next(), words.next(), words.next()),
        (Some(insert), Some(into), Some(table))
            if insert.eq_ignore_ascii_case("insert")
                && into.eq_ignore_ascii_case("into")
                && table
                    .split('(')
                    .next()
                    .is_some_and(|t| t.eq_ignore_ascii_case(TARGET_TABLE))
    )
}

/// One parenthesised tuple of a `VALUES` list.
struct Row {
    /// Lines between the statement start and the tuple's opening parenthesis.
    line_offset: usize,
    values: Result<[String; EXPECTED_VALUES], RecordError>,
}

/// Every tuple of `VALUES (...), (...)`.
///
/// A tuple with bad contents only fails itself. A broken list structure
/// (no `VALUES (`, no closing parenthesis, trailing text) fails the
/// whole statement.
fn parse_rows(statement: &str) -> Result<Vec<Row>, RecordError> {
    let mut pos = find_values_list(statement).ok_or(RecordError::MissingValues)?;
    let lead = statement.len() - statement.trim_start().len();
    let mut rows = Vec::new();

    loop {
        let line_offset = statement[lead..pos].matches('\n').count();
        let (values, consumed) = parse_tuple(&statement[pos..])?;
        rows.push(Row {
            line_offset,
            values,
        });

        let after = &statement[pos + consumed..];
        let trimmed = after.trim_start();
        if trimmed.is_empty() {
            return Ok(rows);
        }
        let next = trimmed
            .strip_prefix(',')
            .map(str::trim_start)
            .and_then(|t| t.strip_prefix('('))
            .ok_or(RecordError::TrailingText)?;
        pos = statement.len() - next.len();
    }
}

/// Parse one tuple starting just after its `(`. Returns the values and the
/// number of bytes consumed, including the closing `)`.
fn parse_tuple(
    input: &str,
) -> Result<(Result<[String; EXPECTED_VALUES], RecordError>, usize), RecordError> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut problem: Option<RecordError> = None;
    let mut state = ValueState::Between;

    for (i, c) in input.char_indices() {
        state = match (state, c) {
            (ValueState::Between, '\'') => ValueState::Inside,
            (ValueState::Between, ')') => ValueState::Closed,
            (ValueState::Between, c) if c == ',' || c.is_whitespace() => ValueState::Between,
            (ValueState::Between, c) => {
                problem.get_or_insert(RecordError::UnexpectedBetween(c));
                ValueState::Between
            }
            (ValueState::Inside, '\'') => ValueState::QuoteSeen,
            (ValueState::Inside, c) => {
                current.push(c);
                ValueState::Inside
            }
            (ValueState::QuoteSeen, '\'') => {
                current.push('\'');
                ValueState::Inside
            }
            (ValueState::QuoteSeen, c) => {
                values.push(std::mem::take(&mut current));
                match c {
                    ')' => ValueState::Closed,
                    c if c == ',' || c.is_whitespace() => ValueState::Between,
                    c => {
                        problem.get_or_insert(RecordError::UnexpectedAfterValue(c));
                        ValueState::Between
                    }
                }
            }
            (ValueState::Closed, _) => ValueState::Closed,
        };

        if state == ValueState::Closed {
            let tuple = match problem {
                Some(reason) => Err(reason),
                None => values
                    .try_into()
                    .map_err(|v: Vec<String>| RecordError::WrongArity(v.len())),
            };
            return Ok((tuple, i + c.len_utf8()));
        }
    }

    match state {
        ValueState::Inside => Err(RecordError::UnterminatedQuote),
        _ => Err(RecordError::MissingCloseParen),
    }
}

/// Byte offset just past `VALUES (`, with `VALUES` matched as a whole word
/// outside quotes.
fn find_values_list(statement: &str) -> Option<usize> {
    const KEYWORD: &str = "values";
    let is_word = |c: char| c.is_ascii_alphanumeric() || c == '_';
    let mut in_quote = false;
    let mut prev = ' ';
    for (i, c) in statement.char_indices() {
        if c == '\'' {
            in_quote = !in_quote;
        } else if !in_quote
            && !is_word(prev)
            && statement
                .get(i..i + KEYWORD.len())
                .is_some_and(|word| word.eq_ignore_ascii_case(KEYWORD))
        {
            let after = &statement[i + KEYWORD.len()..];
            if !after.starts_with(is_word) {
                if let Some(list) = after.trim_start().strip_prefix('(') {
                    return Some(statement.len() - list.len());
                }
            }
        }
        prev = c;
    }
    None
}
