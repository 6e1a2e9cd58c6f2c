//! The read-only line buffer a viewing session is opened over.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// An ordered sequence of text lines, populated once at startup and
/// immutable afterwards.
///
/// Columns are measured in `char`s throughout: [`Document::line_len`] is
/// the character count of a line, and the renderer slices lines by
/// character index to match.
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<String>,
    filename: Option<PathBuf>,
}

impl Document {
    /// An empty document with no backing file (the welcome screen case).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a document from lines already in memory.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            filename: None,
        }
    }

    /// Read a file into lines. Line terminators are stripped; the file is
    /// never written back.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let lines = BufReader::new(file).lines().collect::<io::Result<_>>()?;
        tracing::info!("Opened {:?}", path);
        Ok(Self {
            lines,
            filename: Some(path.to_path_buf()),
        })
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, y: usize) -> Option<&str> {
        self.lines.get(y).map(String::as_str)
    }

    /// Character count of line `y`. The virtual line at `line_count` (and
    /// anything past it) has length zero.
    pub fn line_len(&self, y: usize) -> usize {
        self.lines.get(y).map_or(0, |line| line.chars().count())
    }

    /// Name to show in the status bar.
    pub fn display_name(&self) -> &str {
        self.filename
            .as_deref()
            .and_then(Path::to_str)
            .unwrap_or("[No Name]")
    }
}
