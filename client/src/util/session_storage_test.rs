use super::*;

#[test]
fn memory_store_starts_empty() {
    assert!(MemorySessionStore::default().load().is_none());
}

#[test]
fn memory_store_save_overwrites() {
    let store = MemorySessionStore::default();
    store.save("first").unwrap();
    store.save("second").unwrap();
    assert_eq!(store.load().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_removes_token() {
    let store = MemorySessionStore::with_token("abc");
    store.clear();
    assert!(store.load().is_none());
}

#[test]
fn memory_store_clones_share_slot() {
    let store = MemorySessionStore::default();
    let other = store.clone();
    store.save("shared").unwrap();
    assert_eq!(other.load().as_deref(), Some("shared"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_off_browser() {
    let store = BrowserSessionStore;
    assert_eq!(store.save("token"), Err(StorageError::Unavailable));
    assert!(store.load().is_none());
    store.clear();
}
