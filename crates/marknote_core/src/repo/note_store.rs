//! Append-only note history over a key-value store.
//!
//! # Responsibility
//! - Persist the ordered raw-text note list as one JSON string array under a
//!   fixed storage key.
//! - Recover from missing or malformed persisted state by substituting an
//!   empty history.
//!
//! # Invariants
//! - Every append is a full read-modify-write of the array within one
//!   synchronous call; no other writer of the key is assumed to exist.
//! - Entries are insertion-ordered and never removed.
//! - Load never fails: corrupt state degrades to empty and is only logged.

use crate::repo::kv::{KeyValueStore, StoreResult};
use log::{info, warn};

/// Storage key holding the JSON-encoded note history.
pub const STORAGE_KEY: &str = "editor_content";

/// Ordered raw-text note history persisted through a [`KeyValueStore`].
pub struct NoteStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Creates a note store over the provided key-value backend.
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Loads the full persisted history.
    ///
    /// A missing key, an unreadable backend, or a value that is not a JSON
    /// string array all yield an empty history. Each recovery is logged and
    /// never surfaced to the caller.
    pub fn load(&self) -> Vec<String> {
        let raw = match self.kv.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!(
                    "event=history_load module=repo status=recovered reason=backend_unreadable error={err}"
                );
                return Vec::new();
            }
        };

        decode_history(&raw)
    }

    /// Appends one raw note text to the persisted history.
    ///
    /// Performs a single read-modify-write of the whole array. A corrupt
    /// value on the read leg is treated as empty, so an append always leaves
    /// the key holding a well-formed array.
    pub fn append(&mut self, raw_text: &str) -> StoreResult<()> {
        let mut entries = self.load();
        entries.push(raw_text.to_owned());

        let encoded = serde_json::to_string(&entries)?;
        self.kv.set(STORAGE_KEY, &encoded)?;

        info!(
            "event=history_append module=repo status=ok entries={}",
            entries.len()
        );
        Ok(())
    }
}

fn decode_history(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("event=history_load module=repo status=recovered reason=malformed_json error={err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteStore, STORAGE_KEY};
    use crate::db::open_db_in_memory;
    use crate::repo::kv::{KeyValueStore, SqliteKeyValueStore};

    #[test]
    fn load_of_absent_key_yields_empty_history() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        let kv = SqliteKeyValueStore::try_new(&conn).expect("kv table should exist");
        let store = NoteStore::new(kv);
        assert!(store.load().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        let kv = SqliteKeyValueStore::try_new(&conn).expect("kv table should exist");
        let mut store = NoteStore::new(kv);

        store.append("first").expect("append should succeed");
        store.append("second").expect("append should succeed");

        assert_eq!(store.load(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn malformed_value_recovers_to_empty_and_does_not_poison_appends() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        let mut kv = SqliteKeyValueStore::try_new(&conn).expect("kv table should exist");
        kv.set(STORAGE_KEY, "{not json").expect("raw set should succeed");

        let mut store = NoteStore::new(kv);
        assert!(store.load().is_empty());

        store.append("fresh").expect("append should succeed");
        assert_eq!(store.load(), vec!["fresh".to_string()]);
    }

    #[test]
    fn non_array_value_is_treated_as_empty() {
        let conn = open_db_in_memory().expect("in-memory db should open");
        let mut kv = SqliteKeyValueStore::try_new(&conn).expect("kv table should exist");
        kv.set(STORAGE_KEY, "\"just a string\"")
            .expect("raw set should succeed");

        let store = NoteStore::new(kv);
        assert!(store.load().is_empty());
    }
}
