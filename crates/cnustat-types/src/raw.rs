use crate::Result;
use std::path::{Path, PathBuf};

/// The unprocessed sequence of text lines read from an input file.
///
/// Immutable once loaded. The whole file is read up front; nothing stays
/// open after construction, so a failed parse never leaks a handle.
#[derive(Debug, Clone)]
pub struct RawLog {
    source: Option<PathBuf>,
    lines: Vec<String>,
}

impl RawLog {
    /// Load a log from a file. Fails with an IO error when the file is
    /// missing or unreadable.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(RawLog {
            source: Some(path.to_path_buf()),
            lines: text.lines().map(str::to_string).collect(),
        })
    }

    /// Build a log from in-memory text (used by tests and library callers).
    pub fn from_text(text: &str) -> Self {
        RawLog {
            source: None,
            lines: text.lines().map(str::to_string).collect(),
        }
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
