use super::*;

#[test]
fn memory_store_get_missing_key_is_none() {
    let store = MemoryStore::default();
    assert_eq!(store.get_item("absent").unwrap(), None);
    assert!(!store.is_durable());
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::default();
    store.set_item("k", "one").unwrap();
    store.set_item("k", "two").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("two"));
}

#[test]
fn memory_store_clones_share_contents() {
    let store = MemoryStore::default();
    let other = store.clone();
    store.set_item("k", "v").unwrap();
    assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_falls_back_to_memory_without_a_browser() {
    let store = BrowserStore::open();
    assert!(matches!(store, BrowserStore::Memory(_)));
    assert!(!store.is_durable());
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn storage_error_codes_are_distinct() {
    let errors = [
        StorageError::Read { key: "k".to_owned(), reason: "r".to_owned() },
        StorageError::Write { key: "k".to_owned(), reason: "w".to_owned() },
    ];
    let codes: Vec<&str> = errors.iter().map(ErrorCode::error_code).collect();
    assert_eq!(codes, ["E_STORAGE_READ", "E_STORAGE_WRITE"]);
    assert!(errors[1].to_string().contains("'k'"));
}
