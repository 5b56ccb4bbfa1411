use std::path::PathBuf;

use edu_core::{Role, Session};
use storage::{FileSessionStore, SessionStore, Storage, StoredSession};

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("edu-storage-{}", uuid::Uuid::new_v4()))
        .join(name)
}

#[test]
fn missing_file_reads_as_empty_record() {
    let store = FileSessionStore::new(scratch_path("session.json"));
    let record = store.get().expect("get");
    assert_eq!(record, StoredSession::default());
    assert_eq!(record.into_session(), Session::empty());
}

#[test]
fn set_then_get_returns_the_same_session() {
    let path = scratch_path("session.json");
    let store = FileSessionStore::new(&path);
    let session = Session::authenticated("jwt-123", Role::Teacher, Some("lina".into())).unwrap();

    store
        .set(&StoredSession::from_session(&session))
        .expect("set");
    assert!(path.exists());

    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.get().expect("get").into_session(), session);
}

#[test]
fn overwrite_leaves_no_temp_file_behind() {
    let path = scratch_path("session.json");
    let store = FileSessionStore::new(&path);
    let first = Session::authenticated("a", Role::Student, None).unwrap();
    let second = Session::authenticated("b", Role::Admin, Some("root".into())).unwrap();

    store.set(&StoredSession::from_session(&first)).unwrap();
    store.set(&StoredSession::from_session(&second)).unwrap();

    assert_eq!(store.get().unwrap().into_session(), second);
    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn clear_is_idempotent() {
    let path = scratch_path("session.json");
    let store = FileSessionStore::new(&path);
    let session = Session::authenticated("a", Role::Student, None).unwrap();
    store.set(&StoredSession::from_session(&session)).unwrap();

    store.clear().expect("first clear");
    assert!(!path.exists());
    store.clear().expect("second clear");
    assert_eq!(store.get().unwrap(), StoredSession::default());
}

#[test]
fn partial_record_on_disk_reads_as_empty_session() {
    let path = scratch_path("session.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"{"token":"orphan"}"#).unwrap();

    let record = FileSessionStore::new(&path).get().unwrap();
    assert!(record.is_partial());
    assert_eq!(record.into_session(), Session::empty());
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let path = scratch_path("session.json");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();

    let err = FileSessionStore::new(&path).get().unwrap_err();
    assert!(matches!(err, storage::StorageError::Serialization(_)));
}

#[test]
fn storage_aggregate_wraps_the_file_backend() {
    let path = scratch_path("session.json");
    let storage = Storage::file(&path);
    let session = Session::authenticated("z", Role::Admin, None).unwrap();
    storage
        .session
        .set(&StoredSession::from_session(&session))
        .unwrap();
    assert_eq!(
        FileSessionStore::new(&path).get().unwrap().into_session(),
        session
    );
}

#[test]
fn concurrent_writers_never_fail_and_readers_see_whole_records() {
    let path = scratch_path("session.json");
    let writers: Vec<_> = [("tok-a", Role::Teacher), ("tok-b", Role::Student)]
        .into_iter()
        .map(|(token, role)| {
            let store = FileSessionStore::new(&path);
            std::thread::spawn(move || {
                let session = Session::authenticated(token, role, None).unwrap();
                let record = StoredSession::from_session(&session);
                (0..300)
                    .filter(|_| store.set(&record).is_err())
                    .count()
            })
        })
        .collect();

    let reader = FileSessionStore::new(&path);
    for _ in 0..300 {
        let session = reader.get().expect("read during writes").into_session();
        assert!(session == Session::empty() || session.is_authenticated());
    }

    for writer in writers {
        assert_eq!(writer.join().expect("writer thread"), 0, "some writes failed");
    }

    let last = FileSessionStore::new(&path).get().unwrap().into_session();
    assert!(matches!(last.token(), Some("tok-a" | "tok-b")));
    let leftovers = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}
