//! Record line codec
//!
//! A record is one line of the primary log:
//!
//! ```text
//! <key> : <value>,
//! ```
//!
//! The delimiter is the first colon. Key and value are whitespace-trimmed on
//! parse and the single trailing comma is dropped.

use crate::error::{LineKvError, Result};

/// Separator written between key and value
pub const SEPARATOR: &str = " : ";

/// Terminator written after the value (before the newline)
pub const TERMINATOR: char = ',';

/// A parsed log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// Render a record as it is appended to the log, newline included
pub fn format_record(key: &str, value: &str) -> String {
    format!("{key}{SEPARATOR}{value}{TERMINATOR}\n")
}

/// Split a log line on its first colon
///
/// Returns `None` for lines without a colon (blank or malformed).
pub fn parse_line(line: &str) -> Option<Record<'_>> {
    let (key, rest) = line.split_once(':')?;
    let value = rest.trim();
    let value = value.strip_suffix(TERMINATOR).unwrap_or(value).trim_end();
    Some(Record {
        key: key.trim(),
        value,
    })
}

/// Reject keys and values that would not survive a write/parse cycle
pub fn validate(key: &str, value: &str) -> Result<()> {
    if key.trim().is_empty() {
        return Err(LineKvError::InvalidInput("key must not be empty".to_string()));
    }
    if key.trim() != key {
        return Err(LineKvError::InvalidInput(format!(
            "key '{key}' must not have surrounding whitespace"
        )));
    }
    if key.contains([':', '\n', '\r']) {
        return Err(LineKvError::InvalidInput(format!(
            "key '{}' must not contain ':' or line breaks",
            key.escape_debug()
        )));
    }
    if value.contains(['\n', '\r']) {
        return Err(LineKvError::InvalidInput(
            "value must not contain line breaks".to_string(),
        ));
    }
    Ok(())
}

/// Drop the given 1-based line numbers, keeping survivors in order
///
/// Every number must lie in `1..=lines.len()`.
pub fn remove_lines(lines: Vec<String>, line_numbers: &[usize]) -> Result<Vec<String>> {
    let line_count = lines.len();
    let mut doomed = vec![false; line_count];
    for &line in line_numbers {
        if line < 1 || line > line_count {
            return Err(LineKvError::BoundsViolation { line, line_count });
        }
        doomed[line - 1] = true;
    }

    Ok(lines
        .into_iter()
        .zip(doomed)
        .filter_map(|(line, removed)| (!removed).then_some(line))
        .collect())
}
