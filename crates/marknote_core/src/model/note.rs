//! Saved note record.

use crate::markup::translate::translate;
use serde::Serialize;
use uuid::Uuid;

/// Stable in-memory identifier for a saved note.
///
/// Identity is per process: the persisted history stores raw text only, so
/// ids are regenerated when the history is reloaded.
pub type NoteId = Uuid;

/// One committed note.
///
/// Created at save time (or at startup while re-rendering the persisted
/// history) and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    /// In-memory identity used by view layers as a render key.
    pub id: NoteId,
    /// Raw plain text, the persisted form.
    pub raw: String,
    /// Translated HTML fragment, the rendered form.
    pub html: String,
}

impl Note {
    /// Creates a note from raw text, deriving its rendered form.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let html = translate(&raw);
        Self {
            id: Uuid::new_v4(),
            raw,
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn from_raw_derives_rendered_html() {
        let note = Note::from_raw("# Title");
        assert_eq!(note.raw, "# Title");
        assert_eq!(note.html, "<h1 class=\"text-4xl font-bold\">Title</h1>");
    }

    #[test]
    fn notes_get_distinct_ids() {
        let first = Note::from_raw("same");
        let second = Note::from_raw("same");
        assert_ne!(first.id, second.id);
    }
}
