//! # docs-validator
//!
//! Pre-publication integrity checks for the book's MDX chapters.
//!
//! The site generator renders whatever it is given; this crate makes sure what
//! it is given is structurally sound:
//!
//! - every chapter starts with a `---` frontmatter block holding `title` and
//!   `description`
//! - every fenced code block is closed
//! - no placeholder or corruption markers (`FIXME`, `????`, U+FFFD) remain
//!
//! No markdown is parsed; all checks are line-based or lexical.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docs_validator::{ValidatorConfig, validate_fs};
//!
//! let config = ValidatorConfig::for_base_dir(".");
//! let report = validate_fs(&config).unwrap();
//! println!("Files scanned: {}", report.files_scanned);
//! println!("Code blocks: {}", report.code_blocks);
//! println!("OK: {}", report.ok());
//! ```

pub mod checks;
mod config;
mod document;
mod error;
pub mod output;
mod report;
pub mod strategy;
mod walk;

pub use config::{
    DEFAULT_CONTENT_ROOT, DEFAULT_EXTENSION, ForbiddenPattern, ValidatorConfig, default_patterns,
};
pub use document::{DocumentFile, FileOutcome, read_document, validate_document};
pub use error::{ErrorKind, FatalError, ValidationError};
pub use report::{EXIT_CRASHED, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, RunReport};
pub use walk::walk;

use rayon::prelude::*;

use strategy::DocsFs;
use strategy::fs::OsFs;

/// Validate every document under `config.root`, reading through `fs`.
///
/// Documents are read and checked in parallel; the report lists errors grouped
/// by file in path order.
///
/// # Errors
///
/// Returns a [`FatalError`] if any directory cannot be listed or any document
/// cannot be read. The run stops and no partial report is produced.
pub fn validate<F: DocsFs>(fs: &F, config: &ValidatorConfig) -> Result<RunReport, FatalError> {
    let mut files = walk(fs, &config.root, &config.extension)?;
    files.sort();
    tracing::debug!(
        root = %config.root.display(),
        files = files.len(),
        "discovered documents"
    );

    let outcomes = files
        .par_iter()
        .map(|path| -> Result<FileOutcome, FatalError> {
            let doc = read_document(fs, path, &config.base_dir)?;
            let outcome = validate_document(&doc, &config.patterns);
            tracing::trace!(
                file = %doc.relative_path.display(),
                errors = outcome.errors.len(),
                code_blocks = outcome.code_blocks,
                "validated document"
            );
            Ok(outcome)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut report = RunReport {
        files_scanned: files.len(),
        ..RunReport::default()
    };
    for outcome in outcomes {
        report.code_blocks += outcome.code_blocks;
        report.errors.extend(outcome.errors);
    }

    tracing::info!(
        files = report.files_scanned,
        code_blocks = report.code_blocks,
        errors = report.errors_count(),
        "validation finished"
    );
    Ok(report)
}

/// Validate documents on disk.
///
/// # Errors
///
/// See [`validate`].
pub fn validate_fs(config: &ValidatorConfig) -> Result<RunReport, FatalError> {
    validate(&OsFs, config)
}
