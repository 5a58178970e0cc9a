use std::fs;
use stickynotes::store::backend::StorageBackend;
use stickynotes::store::fs_backend::FsBackend;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().to_path_buf());
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Missing
    assert_eq!(backend.read("notes").unwrap(), None);

    // 2. Write
    backend.write("notes", b"[]").unwrap();

    // 3. Read
    assert_eq!(backend.read("notes").unwrap(), Some(b"[]".to_vec()));
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.write("selectedNote", b"{\"a\":1}").unwrap();
    backend.write("selectedNote", b"{\"a\":2}").unwrap();

    // Verify file exists with the last value
    let expected_path = dir.path().join("selectedNote.json");
    assert_eq!(fs::read_to_string(&expected_path).unwrap(), "{\"a\":2}");

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_missing_root() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("group").join("container");
    let backend = FsBackend::new(nested.clone());

    backend.write("notes", b"[]").unwrap();
    assert!(nested.join("notes.json").exists());
}

#[test]
fn test_fs_backend_keys_are_isolated() {
    let (_dir, backend) = setup();

    backend.write("notes", b"notes value").unwrap();
    backend.write("selectedNote", b"selection value").unwrap();

    assert_eq!(backend.read("notes").unwrap(), Some(b"notes value".to_vec()));
    assert_eq!(
        backend.read("selectedNote").unwrap(),
        Some(b"selection value".to_vec())
    );
}

#[test]
fn test_fs_backend_location() {
    let (dir, backend) = setup();
    assert_eq!(
        backend.location("notes").unwrap(),
        dir.path().join("notes.json")
    );
}

#[test]
fn test_fs_backend_rejects_path_like_keys() {
    let (dir, backend) = setup();

    assert!(backend.write("../outside", b"x").is_err());
    assert!(backend.read("sub/key").is_err());
    assert!(!dir.path().join("..").join("outside.json").exists());
}

#[test]
fn test_fs_backend_two_handles_share_values() {
    let (dir, app) = setup();
    let widget = FsBackend::new(dir.path().to_path_buf());

    app.write("selectedNote", b"one").unwrap();
    assert_eq!(widget.read("selectedNote").unwrap(), Some(b"one".to_vec()));

    app.write("selectedNote", b"two").unwrap();
    assert_eq!(widget.read("selectedNote").unwrap(), Some(b"two".to_vec()));
}

#[test]
fn test_fs_backend_unreadable_value_is_error() {
    let (dir, backend) = setup();
    // A directory where the value file should be
    fs::create_dir_all(dir.path().join("notes.json")).unwrap();
    assert!(backend.read("notes").is_err());
}
