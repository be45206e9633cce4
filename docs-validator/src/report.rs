//! Run report types.

use serde::Serialize;

use crate::error::ValidationError;

/// Process exit status when every file passed.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit status when at least one validation error was found.
pub const EXIT_VALIDATION_FAILED: u8 = 1;
/// Process exit status when the run itself failed. Shares its value with
/// [`EXIT_VALIDATION_FAILED`]; only the printed header tells them apart.
pub const EXIT_CRASHED: u8 = 1;

/// Result of one validation pass over the content tree.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunReport {
    /// Number of documents validated.
    pub files_scanned: usize,
    /// Number of closed fenced code blocks across all documents.
    pub code_blocks: usize,
    /// Every defect found, grouped by file in path order.
    pub errors: Vec<ValidationError>,
}

impl RunReport {
    /// Whether the pass found nothing to report.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of validation errors found.
    #[must_use]
    pub fn errors_count(&self) -> usize {
        self.errors.len()
    }

    /// Exit status for this report. Depends only on the error list.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        if self.ok() {
            EXIT_SUCCESS
        } else {
            EXIT_VALIDATION_FAILED
        }
    }
}
