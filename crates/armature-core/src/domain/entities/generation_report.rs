//! What one generation produced, and what failed.
//!
//! Paths are stored relative to the project root with `/` separators, so the
//! report is the same on every platform and can be rendered as the README
//! structure diagram.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub path: String,
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationFailure {
    pub path: String,
    pub kind: EntryKind,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    root: PathBuf,
    entries: Vec<ReportEntry>,
    failures: Vec<GenerationFailure>,
}

impl GenerationReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Project directory on disk.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_directory(&mut self, path: impl Into<String>) {
        self.entries.push(ReportEntry {
            path: path.into(),
            kind: EntryKind::Directory,
            note: None,
        });
    }

    pub fn record_file(&mut self, path: impl Into<String>, note: Option<&str>) {
        self.entries.push(ReportEntry {
            path: path.into(),
            kind: EntryKind::File,
            note: note.map(str::to_string),
        });
    }

    pub fn record_failure(
        &mut self,
        path: impl Into<String>,
        kind: EntryKind,
        reason: impl Into<String>,
    ) {
        self.failures.push(GenerationFailure {
            path: path.into(),
            kind,
            reason: reason.into(),
        });
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::File)
            .map(|e| e.path.as_str())
    }

    pub fn directories(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::Directory)
            .map(|e| e.path.as_str())
    }

    pub fn failures(&self) -> &[GenerationFailure] {
        &self.failures
    }

    pub fn contains_file(&self, path: &str) -> bool {
        self.files().any(|f| f == path)
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Directories and files attempted, created or not.
    pub fn attempted(&self) -> usize {
        self.entries.len() + self.failures.len()
    }

    /// Render a tree of everything recorded so far plus `pending` files that
    /// are about to be written (the README and LICENSE render the tree before
    /// they exist).
    ///
    /// Directories come before files at each level, both alphabetical.
    pub fn render_tree(&self, root_name: &str, pending: &[(&str, Option<&str>)]) -> String {
        let mut tree = Node::default();
        for entry in &self.entries {
            match entry.kind {
                EntryKind::Directory => {
                    tree.dir_mut(&entry.path);
                }
                EntryKind::File => tree.insert_file(&entry.path, entry.note.as_deref()),
            }
        }
        for (path, note) in pending {
            tree.insert_file(path, *note);
        }

        let mut out = format!("{}/\n", root_name);
        tree.render("", &mut out);
        out
    }
}

// ── Tree rendering ────────────────────────────────────────────────────────────

#[derive(Default)]
struct Node {
    dirs: BTreeMap<String, Node>,
    files: BTreeMap<String, Option<String>>,
}

impl Node {
    fn dir_mut(&mut self, path: &str) -> &mut Node {
        path.split('/')
            .filter(|s| !s.is_empty())
            .fold(self, |node, part| node.dirs.entry(part.to_string()).or_default())
    }

    fn insert_file(&mut self, path: &str, note: Option<&str>) {
        let (parent, file) = match path.rsplit_once('/') {
            Some((parent, file)) => (parent, file),
            None => ("", path),
        };
        self.dir_mut(parent)
            .files
            .insert(file.to_string(), note.map(str::to_string));
    }

    fn render(&self, prefix: &str, out: &mut String) {
        let total = self.dirs.len() + self.files.len();
        let mut index = 0;

        for (name, child) in &self.dirs {
            index += 1;
            let last = index == total;
            out.push_str(&format!("{}{}{}/\n", prefix, branch(last), name));
            let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
            child.render(&next, out);
        }

        for (name, note) in &self.files {
            index += 1;
            let last = index == total;
            match note {
                Some(note) => {
                    out.push_str(&format!("{}{}{}  # {}\n", prefix, branch(last), name, note))
                }
                None => out.push_str(&format!("{}{}{}\n", prefix, branch(last), name)),
            }
        }
    }
}

const fn branch(last: bool) -> &'static str {
    if last { "└── " } else { "├── " }
}
