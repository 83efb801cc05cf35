//! Tests for OffsetIndex
//!
//! These tests verify:
//! - Cumulative offsets across writes
//! - On-disk encoding (pretty JSON stream, not an array)
//! - Reopening picks up the last offset from disk
//! - read_index lookups

use std::fs;
use std::path::PathBuf;

use linekv::index::{IndexBuilder, IndexEntry, OffsetIndex};
use linekv::LineKvError;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_meta() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.meta");
    (temp_dir, path)
}

fn entry(key: &str, offset: u64) -> IndexEntry {
    IndexEntry {
        key: key.to_string(),
        offset,
    }
}

// =============================================================================
// Write Path Tests
// =============================================================================

#[test]
fn test_missing_file_is_empty() {
    let (_temp, path) = setup_temp_meta();
    let index = OffsetIndex::new(&path);

    assert!(index.entries().unwrap().is_empty());
    assert_eq!(index.last_offset().unwrap(), 0);
    assert!(!path.exists());
}

#[test]
fn test_first_write_creates_file() {
    let (_temp, path) = setup_temp_meta();
    let index = OffsetIndex::new(&path);

    index.write_key_index("foo", 3).unwrap();

    assert!(path.exists());
    assert_eq!(index.entries().unwrap(), vec![entry("foo", 3)]);
}

#[test]
fn test_offsets_are_cumulative() {
    let (_temp, path) = setup_temp_meta();
    let index = OffsetIndex::new(&path);

    let lengths = [3usize, 0, 7, 1, 12];
    for (i, len) in lengths.iter().enumerate() {
        index.write_key_index(&format!("k{}", i % 2), *len).unwrap();
    }

    let offsets: Vec<u64> = index.entries().unwrap().iter().map(|e| e.offset).collect();
    assert_eq!(offsets, vec![3, 3, 10, 11, 23]);
    assert_eq!(index.last_offset().unwrap(), 23);
}

#[test]
fn test_encoding_is_pretty_json_stream() {
    let (_temp, path) = setup_temp_meta();
    let index = OffsetIndex::new(&path);

    index.write_key_index("foo", 3).unwrap();
    index.write_key_index("foo", 3).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let expected = "{\n    \"key\": \"foo\",\n    \"offset\": 3\n}\n\
                    {\n    \"key\": \"foo\",\n    \"offset\": 6\n}\n";
    assert_eq!(content, expected);

    // Not a single JSON document
    assert!(serde_json::from_str::<Vec<IndexEntry>>(&content).is_err());
}

#[test]
fn test_reopen_continues_from_disk() {
    let (_temp, path) = setup_temp_meta();

    {
        let index = OffsetIndex::new(&path);
        index.write_key_index("a", 4).unwrap();
        index.write_key_index("b", 5).unwrap();
    }

    let index = OffsetIndex::new(&path);
    assert_eq!(index.last_offset().unwrap(), 9);
    index.write_key_index("c", 1).unwrap();

    assert_eq!(
        index.entries().unwrap(),
        vec![entry("a", 4), entry("b", 9), entry("c", 10)]
    );
}

#[test]
fn test_reads_compact_json_written_elsewhere() {
    let (_temp, path) = setup_temp_meta();
    fs::write(&path, "{\"key\":\"x\",\"offset\":2}{\"key\":\"y\",\"offset\":5}\n").unwrap();

    let index = OffsetIndex::new(&path);
    assert_eq!(index.entries().unwrap(), vec![entry("x", 2), entry("y", 5)]);

    index.write_key_index("z", 1).unwrap();
    assert_eq!(index.read_index("z").unwrap(), 6);
}

#[test]
fn test_corrupt_stream_is_serialization_error() {
    let (_temp, path) = setup_temp_meta();
    fs::write(&path, "{\"key\": \"x\", \"offset\": ").unwrap();

    let index = OffsetIndex::new(&path);
    let err = index.write_key_index("y", 1).unwrap_err();
    assert!(matches!(err, LineKvError::Serialization(_)), "{err:?}");
}

// =============================================================================
// Read Path Tests
// =============================================================================

#[test]
fn test_read_index_returns_latest_entry_for_key() {
    let (_temp, path) = setup_temp_meta();
    let index = OffsetIndex::new(&path);

    index.write_key_index("foo", 3).unwrap();
    index.write_key_index("bar", 2).unwrap();
    index.write_key_index("foo", 3).unwrap();

    assert_eq!(index.read_index("foo").unwrap(), 8);
    assert_eq!(index.read_index("bar").unwrap(), 5);
}

#[test]
fn test_read_index_missing_key() {
    let (_temp, path) = setup_temp_meta();
    let index = OffsetIndex::new(&path);
    index.write_key_index("foo", 3).unwrap();

    let err = index.read_index("nope").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_boxed_index_builder() {
    let (_temp, path) = setup_temp_meta();
    let index: Box<dyn IndexBuilder> = Box::new(OffsetIndex::new(&path));

    index.write_key_index("k", 10).unwrap();
    assert_eq!(index.read_index("k").unwrap(), 10);
}
