//! Per-document checks.
//!
//! Each check is a pure function over the document text:
//! - `frontmatter`: leading `---` metadata block with required keys
//! - `fence`: fenced code block state machine
//! - `patterns`: forbidden lexical patterns

pub mod fence;
pub mod frontmatter;
pub mod patterns;
