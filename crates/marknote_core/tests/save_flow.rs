use marknote_core::db::{open_db, open_db_in_memory};
use marknote_core::{
    translate, EditorService, KeyValueStore, NoteStore, SqliteKeyValueStore, StoreError,
    StoreResult, STORAGE_KEY,
};

#[test]
fn save_persists_raw_text_and_publishes_rendered_html() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::try_new(&conn).unwrap();
    let mut service = EditorService::open(kv);

    service.on_change("# Title\n* bold line");
    service.save().unwrap();

    assert!(service.document().is_empty(), "document should reset");
    assert_eq!(service.rendered().len(), 1);
    assert_eq!(service.rendered()[0].raw, "# Title\n* bold line");
    assert_eq!(service.rendered()[0].html, translate("# Title\n* bold line"));

    let store = NoteStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(store.load(), vec!["# Title\n* bold line".to_string()]);
}

#[test]
fn reloaded_history_retranslates_to_the_same_html() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());

    service.on_change("*** underline line");
    service.save().unwrap();
    let saved_html = service.rendered()[0].html.clone();

    let reloaded = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(reloaded.rendered().len(), 1);
    assert_eq!(reloaded.rendered()[0].html, saved_html);
}

#[test]
fn saving_an_empty_document_appends_empty_entries() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());

    service.save().unwrap();

    assert_eq!(service.rendered().len(), 1);
    assert_eq!(service.rendered()[0].raw, "");
    assert_eq!(service.rendered()[0].html, "");

    let store = NoteStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(store.load(), vec![String::new()]);
}

#[test]
fn saves_accumulate_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut service = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());

    service.on_change("first");
    service.save().unwrap();
    service.on_change("second");
    service.save().unwrap();

    let store = NoteStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(store.load(), vec!["first".to_string(), "second".to_string()]);
    assert_eq!(service.rendered()[1].raw, "second");
}

#[test]
fn corrupt_persisted_state_opens_as_empty_and_accepts_new_saves() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut kv = SqliteKeyValueStore::try_new(&conn).unwrap();
        kv.set(STORAGE_KEY, "[1, 2, oops").unwrap();
    }

    let mut service = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert!(service.rendered().is_empty());

    service.on_change("# recovered");
    service.save().unwrap();

    let store = NoteStore::new(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(store.load(), vec!["# recovered".to_string()]);
}

struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }
}

#[test]
fn failed_persist_leaves_view_and_document_untouched() {
    let mut service = EditorService::open(UnavailableStore);
    service.on_change("# doomed");

    let result = service.save();

    assert!(result.is_err());
    assert!(service.rendered().is_empty(), "view must not show unpersisted content");
    assert_eq!(service.document().plain_text(), "# doomed");
}

#[test]
fn history_survives_a_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("marknote.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let mut service = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());
        service.on_change("** alert line");
        service.save().unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let service = EditorService::open(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(service.rendered().len(), 1);
    assert_eq!(
        service.rendered()[0].html,
        "<span class=\"text-red-500\">alert line</span>"
    );
}
