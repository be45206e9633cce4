//! Error types for docs validation.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// What was wrong with a document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// The file does not start with a `---` delimited block.
    MissingFrontmatter,
    /// The block has no `title:` key.
    MissingFrontmatterTitle,
    /// The block has a title but no `description:` key.
    MissingFrontmatterDescription,
    /// The file ends inside a fenced code block.
    UnclosedFence,
    /// A forbidden pattern occurs somewhere in the file.
    ForbiddenPattern {
        /// Label of the matching pattern.
        pattern: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFrontmatter => f.write_str("missing frontmatter"),
            Self::MissingFrontmatterTitle => f.write_str("missing frontmatter.title"),
            Self::MissingFrontmatterDescription => {
                f.write_str("missing frontmatter.description")
            }
            Self::UnclosedFence => f.write_str("has unclosed code fence"),
            Self::ForbiddenPattern { pattern } => {
                write!(f, "contains forbidden pattern {pattern}")
            }
        }
    }
}

/// A single defect found in a document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationError {
    /// File path, relative to the checkout when possible.
    pub file: PathBuf,
    /// Line number (1-indexed), for errors tied to a specific line.
    pub line: Option<usize>,
    /// The defect.
    #[serde(flatten)]
    pub kind: ErrorKind,
    /// Rendered message, kept in the JSON output for consumers that only read text.
    pub message: String,
}

impl ValidationError {
    /// Create an error for a whole file.
    #[must_use]
    pub fn new(file: PathBuf, kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            file,
            line: None,
            kind,
            message,
        }
    }

    /// Create an error attributed to a line.
    #[must_use]
    pub fn at_line(file: PathBuf, line: usize, kind: ErrorKind) -> Self {
        Self {
            line: Some(line),
            ..Self::new(file, kind)
        }
    }

    /// Format the error for human-readable output.
    ///
    /// `{file}: {message}` or `{file}:{line}: {message}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{line}: {}", self.file.display(), self.message),
            None => format!("{}: {}", self.file.display(), self.message),
        }
    }
}

/// A failure that aborts the whole run.
///
/// Unlike [`ValidationError`], these are not about a document's content: the
/// tree could not be listed or a file could not be read, so no report is
/// produced for the files not yet processed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FatalError {
    /// A directory could not be listed.
    #[error("failed to list directory {}", path.display())]
    ListDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A file could not be read.
    #[error("failed to read file {}", path.display())]
    ReadFile {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
