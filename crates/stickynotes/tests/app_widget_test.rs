use std::fs;
use stickynotes::model::{Note, SortKey};
use stickynotes::store::backend::StorageBackend;
use stickynotes::store::fs_backend::FsBackend;
use stickynotes::store::{NoteStore, NOTES_KEY};
use stickynotes::widget::{SlotState, WidgetBridge, DEFAULT_NOTE_TITLE, SELECTION_KEY};
use tempfile::TempDir;

fn app_and_widget(dir: &TempDir) -> (NoteStore<FsBackend>, WidgetBridge<FsBackend>) {
    let app = FsBackend::new(dir.path().to_path_buf());
    let store = NoteStore::open(app.clone());
    (store, WidgetBridge::new(app))
}

#[test]
fn test_notes_survive_restart() {
    let dir = TempDir::new().unwrap();
    let written: Vec<Note> = {
        let (mut store, _) = app_and_widget(&dir);
        let a = store.add_note("Groceries", "milk\neggs");
        store.add_note("", "");
        let c = store.add_note("Work", "standup");
        store.update_note(&a.id(), "", "Shopping\nmilk");
        store.delete_note(&c.id());
        store.notes().to_vec()
    };

    let reopened = NoteStore::open(FsBackend::new(dir.path().to_path_buf()));
    assert_eq!(reopened.len(), written.len());
    for (before, after) in written.iter().zip(reopened.notes()) {
        assert_eq!(before.id(), after.id());
        assert_eq!(before.title(), after.title());
        assert_eq!(before.content(), after.content());
        assert_eq!(before.date_created(), after.date_created());
    }
    assert_eq!(reopened.notes()[0].title(), "Shopping");
}

#[test]
fn test_persisted_collection_is_a_json_array_of_records() {
    let dir = TempDir::new().unwrap();
    let (mut store, _) = app_and_widget(&dir);
    let note = store.add_note("", "");

    let raw = fs::read_to_string(dir.path().join(format!("{}.json", NOTES_KEY))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = value.as_array().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], note.id().to_string());
    assert_eq!(records[0]["title"], "");
    assert_eq!(records[0]["content"], "");
    assert!(records[0]["dateCreated"].is_string());
}

#[test]
fn test_corrupt_files_fall_back() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.json"), "[{\"id\": 42").unwrap();
    fs::write(dir.path().join("selectedNote.json"), "not a note").unwrap();

    let (store, bridge) = app_and_widget(&dir);
    assert!(store.is_empty());
    assert_eq!(bridge.fetch_selection().title(), DEFAULT_NOTE_TITLE);
}

#[test]
fn test_widget_process_reads_latest_publish() {
    let dir = TempDir::new().unwrap();
    let (mut store, app_bridge) = app_and_widget(&dir);
    let widget = WidgetBridge::new(FsBackend::new(dir.path().to_path_buf()));

    assert_eq!(widget.slot_state(), SlotState::Empty);

    let first = store.add_note("First", "");
    let second = store.add_note("Second", "");

    app_bridge.publish_selection(&first);
    assert_eq!(widget.fetch_selection().id(), first.id());

    app_bridge.publish_selection(&second);
    assert_eq!(widget.fetch_selection().id(), second.id());
    assert_eq!(widget.slot_state(), SlotState::Populated);
}

#[test]
fn test_selection_slot_is_independent_of_notes_key() {
    let dir = TempDir::new().unwrap();
    let (mut store, app_bridge) = app_and_widget(&dir);
    let note = store.add_note("Pinned", "to the home screen");
    app_bridge.publish_selection(&note);

    store.delete_note(&note.id());

    let backend = FsBackend::new(dir.path().to_path_buf());
    assert!(backend.read(SELECTION_KEY).unwrap().is_some());
    assert_eq!(app_bridge.fetch_selection().title(), "Pinned");
    assert!(store.filter_and_sort("", SortKey::Title).is_empty());
}
