//! Tests for the console
//!
//! These tests verify:
//! - Command parsing and argument validation
//! - Output lines for each command
//! - The session stops at the first error

use std::io::Cursor;

use linekv::console::{self, Command, CommandType};
use linekv::{Config, LineKvError, RecordStore};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_session(input: &str) -> (TempDir, String, linekv::Result<()>) {
    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::open(&Config::in_dir(temp_dir.path()));
    let mut output = Vec::new();
    let result = console::run(&store, Cursor::new(input), &mut output);
    (temp_dir, String::from_utf8(output).unwrap(), result)
}

// =============================================================================
// Parsing Tests
// =============================================================================

#[test]
fn test_parse_write() {
    let cmd = Command::parse("write foo bar").unwrap().unwrap();
    assert_eq!(
        cmd,
        Command::Write {
            key: "foo".to_string(),
            value: "bar".to_string()
        }
    );
    assert_eq!(cmd.command_type(), CommandType::Write);
}

#[test]
fn test_parse_read_and_delete() {
    assert_eq!(
        Command::parse("read foo").unwrap(),
        Some(Command::Read {
            key: "foo".to_string()
        })
    );
    assert_eq!(
        Command::parse("  delete   foo  ").unwrap(),
        Some(Command::Delete {
            key: "foo".to_string()
        })
    );
}

#[test]
fn test_parse_blank_line() {
    assert_eq!(Command::parse("").unwrap(), None);
    assert_eq!(Command::parse("   \t").unwrap(), None);
}

#[test]
fn test_parse_errors() {
    for line in ["write foo", "write", "read", "delete", "read a b", "put a b", "write a b c"] {
        let err = Command::parse(line).unwrap_err();
        assert!(matches!(err, LineKvError::Command(_)), "line {:?}", line);
    }
}

#[test]
fn test_command_type_display() {
    assert_eq!(CommandType::Delete.to_string(), "delete");
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_output() {
    let (_temp, output, result) =
        run_session("write foo bar\nwrite foo baz\n\nread foo\ndelete foo\n");

    result.unwrap();
    assert_eq!(
        output,
        "wrote 11 byte data\n\
         wrote 11 byte data\n\
         read 2 data, last found: baz\n\
         deleted 2 record(s)\n"
    );
}

#[test]
fn test_session_stops_at_engine_error() {
    let (_temp, output, result) = run_session("write a 1\nread missing\nwrite b 2\n");

    assert!(result.unwrap_err().is_not_found());
    assert_eq!(output, "wrote 7 byte data\n");
}

#[test]
fn test_session_stops_at_parse_error() {
    let (temp, output, result) = run_session("bogus a\nwrite a 1\n");

    assert!(matches!(result.unwrap_err(), LineKvError::Command(_)));
    assert!(output.is_empty());
    assert!(!temp.path().join("store").exists());
}
