//! Compose-and-save orchestration.
//!
//! # Responsibility
//! - Own the live document, the rendered note list, and the note history.
//! - Commit notes: translate, persist, publish to the view, reset the
//!   compose buffer.
//!
//! # Invariants
//! - The persisted history and the rendered list only ever change together;
//!   a failed persist leaves both the rendered list and the document as they
//!   were.
//! - The history is read once at startup; afterwards this service is the
//!   key's only writer.

use crate::editor::decorator::{decorate_document, BlockDecoration};
use crate::editor::document::Document;
use crate::model::note::{Note, NoteId};
use crate::repo::kv::{KeyValueStore, StoreError};
use crate::repo::note_store::NoteStore;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for compose/save use-cases.
#[derive(Debug)]
pub enum EditorServiceError {
    /// Persisting the note history failed; nothing was committed.
    Store(StoreError),
}

impl Display for EditorServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for EditorServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Editing session facade over the rule engine and note history.
pub struct EditorService<S: KeyValueStore> {
    store: NoteStore<S>,
    document: Document,
    rendered: Vec<Note>,
}

impl<S: KeyValueStore> EditorService<S> {
    /// Opens a session, re-rendering the persisted history for display.
    ///
    /// The history is read exactly once here; corrupt or missing state comes
    /// back as an empty list from the store layer.
    pub fn open(kv: S) -> Self {
        let store = NoteStore::new(kv);
        let rendered: Vec<Note> = store.load().into_iter().map(Note::from_raw).collect();
        info!(
            "event=session_open module=service status=ok restored_notes={}",
            rendered.len()
        );

        Self {
            store,
            document: Document::empty(),
            rendered,
        }
    }

    /// Returns the live document being composed.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replaces the live document content from a host change notification.
    pub fn on_change(&mut self, text: impl Into<String>) {
        self.document.on_change(text);
    }

    /// Runs one decoration pass over the current document.
    pub fn decorations(&self) -> Vec<BlockDecoration> {
        decorate_document(&self.document)
    }

    /// Returns the rendered notes driving the saved-list view.
    pub fn rendered(&self) -> &[Note] {
        &self.rendered
    }

    /// Commits the current document as a new note.
    ///
    /// Translates the raw text, appends it to the persisted history, appends
    /// the rendered note to the view list and resets the compose buffer. An
    /// empty document commits an empty note; there is no special-casing.
    ///
    /// # Errors
    /// - [`EditorServiceError::Store`] when persisting fails. The rendered
    ///   list and the document are left untouched so the view never shows
    ///   content that was not persisted.
    pub fn save(&mut self) -> Result<NoteId, EditorServiceError> {
        let note = Note::from_raw(self.document.plain_text());

        if let Err(err) = self.store.append(&note.raw) {
            error!("event=note_save module=service status=error error={err}");
            return Err(err.into());
        }

        let id = note.id;
        self.rendered.push(note);
        self.document = Document::empty();
        info!(
            "event=note_save module=service status=ok note_id={id} total_notes={}",
            self.rendered.len()
        );
        Ok(id)
    }
}
