use std::rc::Rc;

use kvs_double::{global, Error, MemoryStorage, Op, Storage, StorageExt};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn unbound_slot_is_an_error() {
    init();
    global::uninstall();

    assert!(!global::is_installed());
    match global::storage() {
        Err(Error::NotInstalled) => (),
        Err(e) => panic!("Unexpected error: {}", e),
        Ok(_) => panic!("Expected no storage to be installed"),
    }
}

#[test]
fn install_as_global_exposes_double() {
    init();
    let storage = MemoryStorage::new();
    storage.set_store(vec![("theme", "dark")]);
    storage.install_as_global();

    let store = global::storage().unwrap();
    assert_eq!(store.get_item("theme"), Some("dark".to_owned()));

    // Writes through the slot land in the double the test holds
    store.set_item("lang", "es".into());
    assert_eq!(storage.get_store().get("lang"), Some(&"es".to_owned()));
    assert_eq!(storage.call_count(Op::GetItem), 1);
    assert_eq!(storage.call_count(Op::SetItem), 1);

    global::uninstall();
}

#[test]
fn rebinding_replaces_previous_double() {
    init();
    let first = MemoryStorage::new();
    first.populate(vec![("user", serde_json::json!({ "name": "first" }))]);
    first.install_as_global();

    assert!(global::storage().unwrap().get_item("user").is_some());

    let second = MemoryStorage::new();
    second.install_as_global();

    let store = global::storage().unwrap();
    assert_eq!(store.get_item("user"), None);
    assert_eq!(store.len(), 0);

    store.set_item("only-second", "1".into());
    assert_eq!(second.len(), 1);
    assert!(first.get_store().get("only-second").is_none());

    global::uninstall();
}

#[test]
fn install_returns_previous_binding() {
    init();
    global::uninstall();

    let first = MemoryStorage::new();
    first.set_store(vec![("from", "first")]);

    assert!(global::install(Rc::new(first)).is_none());

    let previous = global::install(Rc::new(MemoryStorage::new())).unwrap();
    assert_eq!(previous.get_item("from"), Some("first".to_owned()));

    assert!(global::uninstall().is_some());
    assert!(global::uninstall().is_none());
}

#[test]
fn scoped_binding_restores_previous() {
    init();
    let outer = MemoryStorage::with_entries(vec![("scope", "outer")]);
    outer.install_as_global();

    {
        let inner = MemoryStorage::with_entries(vec![("scope", "inner")]);
        let _guard = global::scoped(Rc::new(inner));

        let store = global::storage().unwrap();
        assert_eq!(store.get_item("scope"), Some("inner".to_owned()));
    }

    let store = global::storage().unwrap();
    assert_eq!(store.get_item("scope"), Some("outer".to_owned()));

    global::uninstall();
}

#[test]
fn scoped_binding_restores_unbound_slot() {
    init();
    global::uninstall();

    {
        let _guard = global::scoped(Rc::new(MemoryStorage::new()));
        assert!(global::is_installed());
    }

    assert!(!global::is_installed());
}

#[test]
fn bindings_do_not_cross_threads() {
    init();
    let storage = MemoryStorage::new();
    storage.install_as_global();

    let installed_elsewhere = std::thread::spawn(global::is_installed).join().unwrap();
    assert!(!installed_elsewhere);

    global::uninstall();
}

#[test]
fn reset_all_between_cycles() {
    init();
    let storage = MemoryStorage::new();
    storage.install_as_global();

    for cycle in 0..3 {
        let store = global::storage().unwrap();
        assert_eq!(store.get_item("cycle"), None);

        store.set_item("cycle", cycle.into());
        assert_eq!(storage.call_count(Op::SetItem), 1);

        storage.reset_all();
    }

    global::uninstall();
}
