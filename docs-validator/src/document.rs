//! Loading one document and running every check over it.

use std::path::{Path, PathBuf};

use crate::checks::{fence, frontmatter, patterns};
use crate::config::ForbiddenPattern;
use crate::error::{ErrorKind, FatalError, ValidationError};
use crate::strategy::DocsFs;

/// A document read from the content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// Path as listed by the walker.
    pub absolute_path: PathBuf,
    /// Path used in reports, relative to the checkout when possible.
    pub relative_path: PathBuf,
    /// File content. Invalid UTF-8 has been replaced with U+FFFD.
    pub content: String,
}

/// Errors and code block count for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// Defects in check order: frontmatter, fence, patterns.
    pub errors: Vec<ValidationError>,
    /// Number of closed fenced code blocks.
    pub code_blocks: usize,
}

/// Read `path` through `fs`.
///
/// Bytes are decoded lossily so that upstream encoding damage surfaces as a
/// replacement-character finding rather than a crash.
///
/// # Errors
///
/// Returns [`FatalError::ReadFile`] if the file cannot be read.
pub fn read_document<F: DocsFs>(
    fs: &F,
    path: &Path,
    base_dir: &Path,
) -> Result<DocumentFile, FatalError> {
    let bytes = fs.read(path).map_err(|source| FatalError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes).into_owned();
    let relative_path = path
        .strip_prefix(base_dir)
        .map_or_else(|_| path.to_path_buf(), Path::to_path_buf);
    Ok(DocumentFile {
        absolute_path: path.to_path_buf(),
        relative_path,
        content,
    })
}

/// Run the checks over one document: frontmatter, then fences, then patterns.
#[must_use]
pub fn validate_document(doc: &DocumentFile, forbidden: &[ForbiddenPattern]) -> FileOutcome {
    let file = &doc.relative_path;
    let mut errors = Vec::new();

    if let Some(issue) = frontmatter::check_frontmatter(&doc.content) {
        errors.push(ValidationError::new(file.clone(), issue.into()));
    }

    let scan = fence::parse_code_blocks(&doc.content);
    if let Some(line) = scan.unclosed_at {
        errors.push(ValidationError::at_line(
            file.clone(),
            line,
            ErrorKind::UnclosedFence,
        ));
    }

    for pattern in patterns::scan(&doc.content, forbidden) {
        errors.push(ValidationError::new(
            file.clone(),
            ErrorKind::ForbiddenPattern {
                pattern: pattern.label().to_owned(),
            },
        ));
    }

    FileOutcome {
        errors,
        code_blocks: scan.blocks.len(),
    }
}
