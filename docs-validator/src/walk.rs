//! Recursive discovery of files to validate.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::FatalError;
use crate::strategy::{DocsFs, EntryKind};

/// Check if the file name ends with the target extension (case-sensitive).
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(extension))
}

/// Find every regular file under `dir` whose name ends with `extension`.
///
/// Subdirectories are listed in parallel; their results are joined into one
/// flat list before returning. The order of the list is unspecified.
///
/// # Errors
///
/// Returns [`FatalError::ListDir`] if any directory in the tree cannot be
/// listed. Nothing found so far is returned in that case.
pub fn walk<F: DocsFs>(fs: &F, dir: &Path, extension: &str) -> Result<Vec<PathBuf>, FatalError> {
    let entries = fs.list_dir(dir).map_err(|source| FatalError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::trace!(dir = %dir.display(), entries = entries.len(), "listed directory");

    let nested = entries
        .par_iter()
        .map(|entry| match entry.kind {
            EntryKind::Dir => walk(fs, &entry.path, extension),
            EntryKind::File if matches_extension(&entry.path, extension) => {
                Ok(vec![entry.path.clone()])
            }
            EntryKind::File | EntryKind::Other => Ok(Vec::new()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(nested.into_iter().flatten().collect())
}
