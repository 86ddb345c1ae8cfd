//! Tests for file-backed persistence.

use std::fs;

use tumblin_core::{Command, SessionState};
use tumblin_dice::{
    FileBackend, SESSION_KEY, SequentialIdSource, SessionBackend, SessionStore, decode_session,
    encode_session,
};

#[test]
fn test_file_backend_round_trips_a_payload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut backend = FileBackend::new(dir.path().to_path_buf()).expect("backend opens");

    backend
        .write(SESSION_KEY, r#"{"games":[],"selected":null}"#)
        .expect("write succeeds");
    let payload = backend.read(SESSION_KEY).expect("read succeeds");
    assert_eq!(payload.as_deref(), Some(r#"{"games":[],"selected":null}"#));
}

#[test]
fn test_file_backend_reads_none_when_nothing_stored() {
    let dir = tempfile::tempdir().expect("temp dir");
    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend opens");
    assert_eq!(backend.read(SESSION_KEY).expect("read succeeds"), None);
}

#[test]
fn test_encode_decode_round_trips_the_state() {
    let state = SessionState::default()
        .apply(&Command::AddGame { id: "g-1".into() })
        .apply(&Command::SelectGame {
            game_id: "g-1".into(),
        });

    let payload = encode_session(&state).expect("encodes");
    let decoded = decode_session(&payload).expect("decodes");
    assert_eq!(decoded, state);
}

#[test]
fn test_store_reopens_the_session_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");

    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend opens");
    let mut store = SessionStore::open(Box::new(backend), Box::new(SequentialIdSource::new()));
    store.add_game();
    store.select_game("game-1".into());
    drop(store);

    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend opens");
    let store = SessionStore::open(Box::new(backend), Box::new(SequentialIdSource::new()));
    let snapshot = store.snapshot();
    assert_eq!(snapshot.games.len(), 1);
    assert!(snapshot.selected_game().is_some());
}

#[test]
fn test_corrupt_session_file_starts_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(format!("{SESSION_KEY}.json"));
    fs::write(&path, "{\"games\": 42}").expect("seed corrupt file");

    let backend = FileBackend::new(dir.path().to_path_buf()).expect("backend opens");
    let store = SessionStore::open(Box::new(backend), Box::new(SequentialIdSource::new()));
    assert_eq!(*store.snapshot(), SessionState::default());
}
