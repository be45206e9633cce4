//! Fenced code block scanner.
//!
//! A single pass over the lines with two states. Any line starting with three
//! backticks is a marker; there is no nesting, so a marker seen inside a block
//! always closes it.

use serde::Serialize;

const FENCE_MARKER: &str = "```";

/// A closed fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    /// Line of the opening marker (1-indexed).
    pub line: usize,
    /// Trimmed text after the opening marker, e.g. `python` or `ts title="a.ts"`.
    pub info: String,
}

/// Result of scanning a document for fences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FenceScan {
    /// Closed blocks, in document order.
    pub blocks: Vec<CodeBlock>,
    /// Opening marker line of a block still open at end of input.
    pub unclosed_at: Option<usize>,
}

impl FenceScan {
    /// Whether the document ended inside a fence.
    #[must_use]
    pub fn has_unclosed_fence(&self) -> bool {
        self.unclosed_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FenceState {
    Prose,
    FencedBlock(CodeBlock),
}

/// Scan `content` for fenced code blocks.
///
/// Accepts `\n` and `\r\n` line endings. A block left open at the end is not
/// included in [`FenceScan::blocks`].
#[must_use]
pub fn parse_code_blocks(content: &str) -> FenceScan {
    let mut blocks = Vec::new();
    let mut state = FenceState::Prose;

    for (line_num, line) in content.lines().enumerate() {
        let Some(rest) = line.strip_prefix(FENCE_MARKER) else {
            continue;
        };
        state = match state {
            FenceState::Prose => FenceState::FencedBlock(CodeBlock {
                line: line_num + 1,
                info: rest.trim().to_owned(),
            }),
            FenceState::FencedBlock(block) => {
                blocks.push(block);
                FenceState::Prose
            }
        };
    }

    let unclosed_at = match state {
        FenceState::Prose => None,
        FenceState::FencedBlock(block) => Some(block.line),
    };
    FenceScan {
        blocks,
        unclosed_at,
    }
}
