//! Forbidden-pattern scanner.

use crate::config::ForbiddenPattern;

/// Return the patterns that occur in `content`, in pattern order.
///
/// Each pattern is reported at most once however often it occurs, and every
/// pattern is checked regardless of earlier hits.
#[must_use]
pub fn scan<'p>(content: &str, patterns: &'p [ForbiddenPattern]) -> Vec<&'p ForbiddenPattern> {
    patterns.iter().filter(|p| p.is_match(content)).collect()
}
