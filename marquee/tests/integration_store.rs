//! Integration tests for the full store lifecycle.
//!
//! These exercise the complete flow from first run through mutation and
//! reload, including the persistence edge cases: missing file, corrupted
//! file, and disk-content idempotence of save-after-load.

use marquee::{MarqueeError, Movie, StorageError, Store};
use tempfile::tempdir;

#[test]
fn test_full_catalogue_lifecycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.json");

    // Phase 1: first run, empty catalogue, populate it.
    {
        let store = Store::new(&path);
        assert!(store.load().unwrap().is_empty());

        store.add("The Shawshank Redemption", 1994, 9.3).unwrap();
        store.add("Titanic", 1997, 7.9).unwrap();
        store.add("Heat", 1995, 8.2).unwrap();
    }

    // Phase 2: a fresh handle sees persisted state and can mutate it.
    {
        let store = Store::new(&path);
        let catalog = store.load().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog["Titanic"], Movie::new(1997, 7.9));

        store.update("Titanic", 8.1).unwrap();
        store.delete("Heat").unwrap();
    }

    // Phase 3: mutations persisted, untouched entries unchanged.
    {
        let store = Store::new(&path);
        let catalog = store.load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["Titanic"], Movie::new(1997, 8.1));
        assert_eq!(catalog["The Shawshank Redemption"], Movie::new(1994, 9.3));
        assert!(!catalog.contains_key("Heat"));
    }
}

#[test]
fn test_each_mutation_reloads_latest_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.json");

    // Two handles over the same file: a write through one is visible to a
    // later mutation through the other, because every mutation starts with
    // its own load.
    let store_a = Store::new(&path);
    let store_b = Store::new(&path);

    store_a.add("Alien", 1979, 8.5).unwrap();
    store_b.add("Aliens", 1986, 8.4).unwrap();

    let catalog = store_a.load().unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn test_failed_mutation_preserves_existing_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.json");
    let store = Store::new(&path);

    store.add("Alien", 1979, 8.5).unwrap();

    assert!(matches!(
        store.delete("Predator"),
        Err(MarqueeError::NotFound { .. })
    ));
    assert!(matches!(
        store.update("Predator", 7.0),
        Err(MarqueeError::NotFound { .. })
    ));

    let catalog = store.load().unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog["Alien"], Movie::new(1979, 8.5));
}

#[test]
fn test_corrupted_catalogue_surfaces_not_resets() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.json");

    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let store = Store::new(&path);
    match store.load().unwrap_err() {
        MarqueeError::Storage(StorageError::Corrupted { .. }) => {}
        other => panic!("expected Corrupted, got: {other:?}"),
    }

    // The unparsable bytes are still on disk for the user to inspect.
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1, 2, 3]");
}

#[test]
fn test_unicode_titles_round_trip() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("movies.json"));

    store.add("Amélie", 2001, 8.3).unwrap();
    store.add("千と千尋の神隠し", 2001, 8.6).unwrap();

    let catalog = store.load().unwrap();
    assert_eq!(catalog["Amélie"], Movie::new(2001, 8.3));
    assert_eq!(catalog["千と千尋の神隠し"], Movie::new(2001, 8.6));
}

#[test]
fn test_add_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = Store::new(dir.path().join("movies.json"));

    store.add("Heat", 1995, 8.2).unwrap();
    let first = std::fs::read_to_string(store.path()).unwrap();

    store.add("Heat", 1995, 8.2).unwrap();
    let second = std::fs::read_to_string(store.path()).unwrap();

    assert_eq!(first, second);
}
