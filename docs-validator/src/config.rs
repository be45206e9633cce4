//! Configuration types for docs validation.
//!
//! The checker historically ran with a compiled-in content root and a fixed
//! pattern list. Both are carried here as explicit values so the runner can be
//! pointed at any checkout (or an in-memory tree in tests).

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Content root relative to the checkout, as laid out by the site generator.
pub const DEFAULT_CONTENT_ROOT: &str = "src/content/docs";

/// Chapters are authored as MDX.
pub const DEFAULT_EXTENSION: &str = ".mdx";

/// A named lexical signature for unfinished or corrupted content.
///
/// Matching goes through [`Regex::is_match`], which keeps no cursor between
/// calls, so scanning the same content twice always gives the same answer.
#[derive(Debug, Clone)]
pub struct ForbiddenPattern {
    label: String,
    regex: Regex,
}

impl ForbiddenPattern {
    /// Build a pattern from a regex source.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not a valid regular expression.
    pub fn new(label: impl Into<String>, source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            label: label.into(),
            regex: Regex::new(source)?,
        })
    }

    /// Label used in error messages.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the pattern occurs anywhere in `content`.
    #[must_use]
    pub fn is_match(&self, content: &str) -> bool {
        self.regex.is_match(content)
    }
}

fn builtin(label: &str, source: &str) -> ForbiddenPattern {
    match ForbiddenPattern::new(label, source) {
        Ok(pattern) => pattern,
        Err(err) => panic!("Invalid built-in pattern {label}: {err}"),
    }
}

static BUILTIN_PATTERNS: LazyLock<Vec<ForbiddenPattern>> = LazyLock::new(|| {
    vec![
        // placeholder left by an author
        builtin("/FIXME/i", r"(?i)FIXME"),
        // lost characters, usually a botched copy/paste of non-Latin text
        builtin(r"/\?\?\?\?/g", r"\?{4,}"),
        // U+FFFD, the decoder's replacement character
        builtin(r"/\uFFFD/g", "\u{FFFD}"),
    ]
});

/// The built-in forbidden patterns, in reporting order.
#[must_use]
pub fn default_patterns() -> Vec<ForbiddenPattern> {
    BUILTIN_PATTERNS.clone()
}

/// Everything the runner needs to know about one validation pass.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ValidatorConfig {
    /// Directory the content tree is scanned from.
    pub root: PathBuf,
    /// Directory reported paths are made relative to (the checkout).
    pub base_dir: PathBuf,
    /// File-name suffix of files to validate. Case-sensitive.
    pub extension: String,
    /// Forbidden patterns, applied in order.
    pub patterns: Vec<ForbiddenPattern>,
}

impl ValidatorConfig {
    /// Default layout for a checkout located at `base_dir`.
    #[must_use]
    pub fn for_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        Self {
            root: base_dir.join(DEFAULT_CONTENT_ROOT),
            base_dir,
            extension: DEFAULT_EXTENSION.to_owned(),
            patterns: default_patterns(),
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::for_base_dir(".")
    }
}
