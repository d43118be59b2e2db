//! Integration tests for snapshot persistence and reloading

use crate::integration::test_utils::{assert_children_sorted, populate_tree};
use dusnap::store::{read_snapshot, write_snapshot};
use dusnap::tree::node::FileKind;
use dusnap::tree::walker::Walker;
use std::fs;
use tempfile::TempDir;

/// Test that a sorted scan survives a write/read cycle unchanged
#[test]
fn test_scan_write_read_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("data");
    fs::create_dir(&root).unwrap();
    populate_tree(&root);

    let mut scanned = Walker::new(root.to_string_lossy().to_string(), 5)
        .scan()
        .unwrap();
    scanned.sort_children_recursive();

    let snapshot_path = temp_dir.path().join("snap.json");
    write_snapshot(&snapshot_path, &scanned).unwrap();
    let loaded = read_snapshot(&snapshot_path).unwrap();

    assert_eq!(loaded, scanned);
}

/// Test that loading re-sorts children at every level of the document
#[test]
fn test_loaded_document_is_sorted_every_level() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("shuffled.json");
    fs::write(
        &snapshot_path,
        r#"{
            "path": "/r", "size": 3072, "type": 2,
            "subs": [
                {"path": "/r/z", "size": 512, "type": 1},
                {"path": "/r/a", "size": 1536, "type": 2, "subs": [
                    {"path": "/r/a/n", "size": 512, "type": 1},
                    {"path": "/r/a/b", "size": 512, "type": 1}
                ]},
                {"path": "/r/m", "size": 512, "type": 3}
            ]
        }"#,
    )
    .unwrap();

    let loaded = read_snapshot(&snapshot_path).unwrap();
    assert_children_sorted(&loaded);

    let top: Vec<&str> = loaded.children.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(top, vec!["/r/a", "/r/m", "/r/z"]);
    let nested: Vec<&str> = loaded.children[0]
        .children
        .iter()
        .map(|c| c.path.as_str())
        .collect();
    assert_eq!(nested, vec!["/r/a/b", "/r/a/n"]);
}

/// Test that missing record fields fall back to defaults instead of failing
#[test]
fn test_reader_defaults_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("partial.json");
    fs::write(
        &snapshot_path,
        r#"{
            "path": "/d", "size": 1024, "type": 2,
            "subs": [
                {"path": "/d/a"},
                {"size": 512, "type": 1}
            ]
        }"#,
    )
    .unwrap();

    let loaded = read_snapshot(&snapshot_path).unwrap();
    assert_eq!(loaded.children.len(), 2);

    let unnamed = &loaded.children[0];
    assert_eq!(unnamed.path, "");
    assert_eq!(unnamed.size, 512);
    assert_eq!(unnamed.kind, FileKind::Regular);

    let bare = &loaded.children[1];
    assert_eq!(bare.path, "/d/a");
    assert_eq!(bare.size, 0);
    assert_eq!(bare.kind, FileKind::Unknown);
}

/// Test that non-object child records are dropped without failing the parent
#[test]
fn test_reader_drops_malformed_children_keeps_rest() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("mixed.json");
    fs::write(
        &snapshot_path,
        r#"{
            "path": "/d", "size": 1024, "type": 2,
            "subs": [42, {"path": "/d/keep", "size": 512, "type": 1}, "junk"]
        }"#,
    )
    .unwrap();

    let loaded = read_snapshot(&snapshot_path).unwrap();
    assert_eq!(loaded.children.len(), 1);
    assert_eq!(loaded.children[0].path, "/d/keep");
}

/// Test that fields outside the schema are ignored
#[test]
fn test_reader_ignores_unknown_fields() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("extra.json");
    fs::write(
        &snapshot_path,
        r#"{"path": "/f", "size": 512, "type": 1, "mtime": 123, "owner": "root"}"#,
    )
    .unwrap();

    let loaded = read_snapshot(&snapshot_path).unwrap();
    assert_eq!(loaded.path, "/f");
    assert_eq!(loaded.size, 512);
    assert_eq!(loaded.kind, FileKind::Regular);
}

/// Test that a document whose top level is not an object fails to load
#[test]
fn test_reader_rejects_top_level_non_object() {
    let temp_dir = TempDir::new().unwrap();
    let snapshot_path = temp_dir.path().join("bad.json");
    fs::write(&snapshot_path, "[1, 2, 3]").unwrap();

    assert!(read_snapshot(&snapshot_path).is_err());
}
