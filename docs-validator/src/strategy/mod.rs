//! Content sources.
//!
//! The runner only sees the tree through [`DocsFs`], so the same pipeline runs
//! against the real filesystem ([`fs::OsFs`]) or an in-memory tree in tests.

use std::io;
use std::path::{Path, PathBuf};

pub mod fs;
#[cfg(test)]
pub mod memory;

/// What a directory entry is, as reported by the listing itself.
///
/// Symbolic links are reported as [`EntryKind::Other`]: the walker never
/// follows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    Other,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Read-only access to a content tree.
///
/// Implementations must be shareable across threads; directories are listed
/// and files read in parallel.
pub trait DocsFs: Sync {
    /// List the immediate children of `dir`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `dir` cannot be listed.
    fn list_dir(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Read the raw bytes of `path`.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if `path` cannot be read.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}
