//! Live decoration pass over document blocks.
//!
//! # Responsibility
//! - Test each block against the rule table on every content change.
//! - Emit whole-block treatment spans for the host view to render.
//!
//! # Invariants
//! - A block is either fully styled by exactly one rule or unstyled.
//! - Repeating the pass over unchanged text yields an identical overlay.

use crate::editor::document::{Block, Document};
use crate::markup::rules::{match_line, Treatment};

/// One decorated span in the live overlay.
///
/// Spans always cover the whole block: `start` is 0 and `end` is the block's
/// character count, mirroring how the composing surface applies a treatment
/// to an entire paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDecoration {
    /// Key of the decorated block.
    pub block: usize,
    /// Span start in characters, always 0.
    pub start: usize,
    /// Span end in characters, exclusive.
    pub end: usize,
    /// Treatment the matched rule assigns.
    pub treatment: Treatment,
}

/// Decorates a single block, or returns `None` when no marker matches.
pub fn decorate_block(block: &Block<'_>) -> Option<BlockDecoration> {
    match_line(block.text).map(|(rule, _)| BlockDecoration {
        block: block.key,
        start: 0,
        end: block.text.chars().count(),
        treatment: rule.treatment,
    })
}

/// Runs one full decoration pass over the document.
///
/// Pure derivation: the document is not modified and the overlay is rebuilt
/// from scratch on every call.
pub fn decorate_document(document: &Document) -> Vec<BlockDecoration> {
    document
        .blocks()
        .iter()
        .filter_map(decorate_block)
        .collect()
}
