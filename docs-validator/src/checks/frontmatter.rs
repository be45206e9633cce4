//! Frontmatter presence and required keys.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ErrorKind;

/// Frontmatter delimiter line.
const DELIMITER: &str = "---";

static TITLE_KEY: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"(?m)^\s*title\s*:") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid title key regex: {err}"),
});

static DESCRIPTION_KEY: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"(?m)^\s*description\s*:") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid description key regex: {err}"),
    });

/// The first frontmatter problem found in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterIssue {
    MissingBlock,
    MissingTitle,
    MissingDescription,
}

impl From<FrontmatterIssue> for ErrorKind {
    fn from(issue: FrontmatterIssue) -> Self {
        match issue {
            FrontmatterIssue::MissingBlock => Self::MissingFrontmatter,
            FrontmatterIssue::MissingTitle => Self::MissingFrontmatterTitle,
            FrontmatterIssue::MissingDescription => Self::MissingFrontmatterDescription,
        }
    }
}

/// Return the body of the leading frontmatter block, if there is one.
///
/// The very first line must be exactly `---`. The block ends at the next line
/// that is exactly `---`, but at least one body line (possibly blank) must come
/// first: a `---` directly after the opener is body, not a closer.
fn extract_block(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next()? != DELIMITER {
        return None;
    }
    let mut body = Vec::new();
    for line in lines {
        if line == DELIMITER && !body.is_empty() {
            return Some(body.join("\n"));
        }
        body.push(line);
    }
    None
}

/// Check the frontmatter of a document.
///
/// Returns `None` when the block exists with both `title` and `description`.
/// Only the first problem is reported: a missing block short-circuits the key
/// checks, and a missing title hides a missing description.
#[must_use]
pub fn check_frontmatter(content: &str) -> Option<FrontmatterIssue> {
    let Some(block) = extract_block(content) else {
        return Some(FrontmatterIssue::MissingBlock);
    };
    if !TITLE_KEY.is_match(&block) {
        return Some(FrontmatterIssue::MissingTitle);
    }
    if !DESCRIPTION_KEY.is_match(&block) {
        return Some(FrontmatterIssue::MissingDescription);
    }
    None
}
