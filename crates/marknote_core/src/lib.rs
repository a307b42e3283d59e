//! Core domain logic for MarkNote, a marker-driven note composer.
//!
//! One rule table maps line-prefix markers (`# `, `* `, `** `, `*** `) to
//! presentation treatments. Two adapters consult it: a live per-block
//! decorator that styles paragraphs while a note is composed, and a batch
//! translator that converts the whole text to an HTML fragment at save time.
//! Saved raw text is persisted as a JSON string array behind a key-value
//! store.

pub mod db;
pub mod editor;
pub mod logging;
pub mod markup;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::decorator::{decorate_block, decorate_document, BlockDecoration};
pub use editor::document::{Block, Document};
pub use logging::{default_log_level, init_logging, logging_status};
pub use markup::presentation::{live_markup, saved_markup, Markup};
pub use markup::rules::{match_line, Rule, Treatment, RULES};
pub use markup::translate::translate;
pub use model::note::{Note, NoteId};
pub use repo::kv::{KeyValueStore, SqliteKeyValueStore, StoreError, StoreResult};
pub use repo::note_store::{NoteStore, STORAGE_KEY};
pub use service::editor_service::{EditorService, EditorServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
