//! Transient compose buffer and its paragraph blocks.
//!
//! # Responsibility
//! - Mirror the host editing surface's plain-text state between keystrokes.
//! - Decompose the text into paragraph blocks for per-block decoration.
//!
//! # Invariants
//! - A document lives only while one note is being composed; saving replaces
//!   it with a fresh empty one.
//! - Block keys are stable within a single decomposition pass.

/// One paragraph-level unit of the composing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'doc> {
    /// Paragraph index, stable for this pass.
    pub key: usize,
    /// Plain text of the paragraph, line terminator excluded.
    pub text: &'doc str,
}

/// Plain-text content of the composing surface at a point in time.
///
/// Not persisted; the on-disk form of a note is produced from this buffer
/// only at save time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Creates an empty document, the state after startup and after a save.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Replaces the full document content from a host change notification.
    pub fn on_change(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Returns the current raw text.
    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// Returns whether nothing has been composed yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Decomposes the document into one block per paragraph.
    ///
    /// Paragraphs are newline-separated; an empty document yields a single
    /// empty block, matching how an editing surface renders one empty line.
    pub fn blocks(&self) -> Vec<Block<'_>> {
        self.text
            .split('\n')
            .enumerate()
            .map(|(key, text)| Block { key, text })
            .collect()
    }
}
