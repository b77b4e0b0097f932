use std::sync::Arc;

use unap_admin_api::{FileStore, KeyValueStore, SessionStore};

#[test]
fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    {
        let store = FileStore::open(&path).unwrap();
        store.set("unap-admin-token", "tok");
        store.set("unap-admin-base-url", "https://admin.example.com");
    }

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("unap-admin-token").as_deref(), Some("tok"));
    assert_eq!(
        store.get("unap-admin-base-url").as_deref(),
        Some("https://admin.example.com")
    );
}

#[test]
fn file_store_remove_is_durable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = FileStore::open(&path).unwrap();
    store.set("unap-admin-token", "tok");
    store.remove("unap-admin-token");
    drop(store);

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("unap-admin-token"), None);
}

#[test]
fn corrupt_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ definitely not json").unwrap();

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("unap-admin-token"), None);
}

#[test]
fn session_store_over_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let session = SessionStore::new(Arc::new(FileStore::open(&path).unwrap()));

    session.set_token("abc");
    assert_eq!(session.token().as_deref(), Some("abc"));
    session.clear_token();
    assert!(session.token().is_none());
}
