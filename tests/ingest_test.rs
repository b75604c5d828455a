//! Ingestion behaviour: single files, recursive directory expansion,
//! batches, and failure handling.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use checklist_maker::error::ChecklistError;
use checklist_maker::ingest::{ingest, ingest_batch};
use checklist_maker::model::ChecklistStore;
use tempfile::tempdir;

fn names(store: &ChecklistStore) -> Vec<String> {
    store.iter().map(|i| i.display_name.clone()).collect()
}

/// A nonexistent path is a PathNotFound error and adds nothing.
#[test]
fn test_ingest_nonexistent_path() {
    let mut store = ChecklistStore::default();
    let result = ingest(&mut store, Path::new("/nonexistent/path/12345"));

    let err = result.unwrap_err();
    assert!(matches!(err, ChecklistError::PathNotFound(_)));
    assert!(store.is_empty());
}

/// A single regular file appends exactly one item.
#[test]
fn test_ingest_single_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("x.txt");
    File::create(&path).unwrap();

    let mut store = ChecklistStore::default();
    let added = ingest(&mut store, &path).unwrap();

    assert_eq!(added, 1);
    assert_eq!(names(&store), vec!["x.txt"]);
    assert_eq!(store.get(0).unwrap().path, path);
}

/// An empty directory appends nothing and is not an error.
#[test]
fn test_ingest_empty_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut store = ChecklistStore::default();
    let added = ingest(&mut store, dir.path()).unwrap();

    assert_eq!(added, 0);
    assert!(store.is_empty());
}

/// A directory with N regular files at any depth appends exactly N items,
/// however many sub-directories contain them.
#[test]
fn test_ingest_directory_recurses() {
    let dir = tempdir().expect("Failed to create temp dir");
    File::create(dir.path().join("a.txt")).unwrap();
    fs::create_dir_all(dir.path().join("sub/deeper")).unwrap();
    File::create(dir.path().join("sub/b.txt")).unwrap();
    File::create(dir.path().join("sub/deeper/c.txt")).unwrap();

    let mut store = ChecklistStore::default();
    let added = ingest(&mut store, dir.path()).unwrap();

    assert_eq!(added, 3);
    assert_eq!(store.len(), 3);

    // Sibling order is OS-defined, so check membership only.
    let mut found = names(&store);
    found.sort();
    assert_eq!(found, vec!["a.txt", "b.txt", "c.txt"]);
}

/// Dropping the same file twice yields two items.
#[test]
fn test_ingest_does_not_deduplicate() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("x.txt");
    File::create(&path).unwrap();

    let mut store = ChecklistStore::default();
    ingest(&mut store, &path).unwrap();
    ingest(&mut store, &path).unwrap();

    assert_eq!(names(&store), vec!["x.txt", "x.txt"]);
}

/// A batch of two individual files lands in the order given.
#[test]
fn test_ingest_batch_preserves_order() {
    let dir = tempdir().expect("Failed to create temp dir");
    let x = dir.path().join("x.txt");
    let y = dir.path().join("y.txt");
    File::create(&x).unwrap();
    File::create(&y).unwrap();

    let mut store = ChecklistStore::default();
    let outcome = ingest_batch(&mut store, &[x, y]);

    assert_eq!(outcome.added, 2);
    assert!(outcome.failed.is_empty());
    assert_eq!(names(&store), vec!["x.txt", "y.txt"]);
}

/// One bad path in a batch is recorded, and the remaining paths are still
/// processed.
#[test]
fn test_ingest_batch_continues_after_failure() {
    let dir = tempdir().expect("Failed to create temp dir");
    let good = dir.path().join("good.txt");
    File::create(&good).unwrap();
    let bad = PathBuf::from("/nonexistent/path/12345");

    let mut store = ChecklistStore::default();
    let outcome = ingest_batch(&mut store, &[bad.clone(), good]);

    assert_eq!(outcome.added, 1);
    assert_eq!(outcome.failed.len(), 1);
    assert_eq!(outcome.failed[0].0, bad);
    assert_eq!(names(&store), vec!["good.txt"]);
}

/// An empty batch is a no-op.
#[test]
fn test_ingest_batch_empty() {
    let mut store = ChecklistStore::default();
    let outcome = ingest_batch(&mut store, &[]);

    assert_eq!(outcome.added, 0);
    assert!(outcome.failed.is_empty());
    assert!(store.is_empty());
}

/// End-to-end: ingest a tree, check two items off, remove them, clear.
#[test]
fn test_checklist_scenario() {
    let dir = tempdir().expect("Failed to create temp dir");
    File::create(dir.path().join("a.txt")).unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    File::create(dir.path().join("sub/b.txt")).unwrap();
    File::create(dir.path().join("sub/c.txt")).unwrap();

    let mut store = ChecklistStore::default();
    ingest(&mut store, dir.path()).unwrap();
    assert_eq!(store.len(), 3);

    // Check off a.txt and c.txt wherever the traversal put them.
    for index in 0..store.len() {
        let name = store.get(index).unwrap().display_name.clone();
        if name == "a.txt" || name == "c.txt" {
            store.toggle(index);
        }
    }

    let removed = store.remove_selected();
    assert_eq!(removed, 2);
    assert_eq!(names(&store), vec!["b.txt"]);

    store.clear();
    assert!(store.is_empty());
}
