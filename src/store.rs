//! Record Store
//!
//! Owns the primary append-only log and coordinates the index builder.
//!
//! ## Responsibilities
//! - Append `key : value,` records and notify the index builder
//! - Answer reads by a full linear scan (last match wins)
//! - Delete every record of a key by rewriting the log
//!
//! The log is the single source of truth. Reads and deletes never consult
//! the index, so both are O(n) in the number of records.

use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;

use crate::config::Config;
use crate::error::{LineKvError, Result};
use crate::index::{IndexBuilder, OffsetIndex};
use crate::record;

/// Outcome of a read: the winning value and how many records matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    /// Value of the last matching record in file order
    pub value: String,

    /// Number of records carrying the key
    pub occurrences: usize,
}

/// Result of scanning the log for one key
struct ScanResult {
    last_value: Option<String>,
    /// 1-based line numbers of every match
    lines: Vec<usize>,
}

/// Append-only text log with a pluggable index
///
/// ## Concurrency
/// `store_kv` and `delete_key` are serialized by `write_lock` so a delete's
/// read-modify-rewrite cannot drop a concurrent append from this instance.
/// Nothing guards against other processes touching the same files.
pub struct RecordStore<I: IndexBuilder> {
    /// Primary log path
    log_path: PathBuf,

    /// Notified after every successful append
    index: I,

    /// Serializes mutating operations
    write_lock: Mutex<()>,
}

impl RecordStore<OffsetIndex> {
    /// Build a store over the configured log, indexed by an `OffsetIndex`
    /// on the configured metadata file
    pub fn open(config: &Config) -> Self {
        Self::new(&config.log_path, OffsetIndex::new(&config.meta_path))
    }
}

impl<I: IndexBuilder> RecordStore<I> {
    /// Create a store over `log_path` using the given index builder
    pub fn new(log_path: impl AsRef<Path>, index: I) -> Self {
        Self {
            log_path: log_path.as_ref().to_path_buf(),
            index,
            write_lock: Mutex::new(()),
        }
    }

    /// Append a record and update the index
    ///
    /// Returns the number of bytes appended to the log. If the index update
    /// fails after the append, `IndexDesync` is returned and the appended
    /// record stays in the log.
    pub fn store_kv(&self, key: &str, value: &str) -> Result<usize> {
        record::validate(key, value)?;
        let _write_guard = self.write_lock.lock();

        let line = record::format_record(key, value);
        {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.log_path)?;
            file.write_all(line.as_bytes())?;
        }
        let written = line.len();

        if let Err(e) = self.index.write_key_index(key, value.len()) {
            tracing::warn!(key, written, error = %e, "log append succeeded but index update failed");
            return Err(LineKvError::IndexDesync {
                written,
                source: Box::new(e),
            });
        }

        tracing::debug!(key, written, "stored record");
        Ok(written)
    }

    /// Value of the last record carrying `key`
    pub fn read_key(&self, key: &str) -> Result<String> {
        self.read_key_with_count(key).map(|lookup| lookup.value)
    }

    /// Like `read_key`, also reporting how many records matched
    pub fn read_key_with_count(&self, key: &str) -> Result<Lookup> {
        let scan = self.scan(key)?;
        let occurrences = scan.lines.len();
        match scan.last_value {
            Some(value) => {
                tracing::debug!(key, occurrences, "read key");
                Ok(Lookup { value, occurrences })
            }
            None => Err(LineKvError::NotFound {
                key: key.to_string(),
            }),
        }
    }

    /// Remove every record carrying `key`
    ///
    /// The survivors are written to a temporary sibling file which is then
    /// renamed over the log, so a failed rewrite leaves the original intact.
    /// Index entries are left in place. Returns the number of removed records.
    pub fn delete_key(&self, key: &str) -> Result<usize> {
        let _write_guard = self.write_lock.lock();

        let scan = self.scan(key)?;
        if scan.lines.is_empty() {
            return Err(LineKvError::NotFound {
                key: key.to_string(),
            });
        }

        let lines = self.read_lines()?;
        let survivors = record::remove_lines(lines, &scan.lines)?;
        self.rewrite(&survivors)?;

        tracing::debug!(key, removed = scan.lines.len(), remaining = survivors.len(), "deleted key");
        Ok(scan.lines.len())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the primary log path
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Get the index builder
    pub fn index(&self) -> &I {
        &self.index
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// `None` when the log has not been created yet
    fn open_reader(&self) -> Result<Option<BufReader<File>>> {
        match File::open(&self.log_path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Walk the log once, collecting matches for `key`
    fn scan(&self, key: &str) -> Result<ScanResult> {
        let mut result = ScanResult {
            last_value: None,
            lines: Vec::new(),
        };

        let Some(reader) = self.open_reader()? else {
            return Ok(result);
        };

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx + 1;
            let Some(rec) = record::parse_line(&line) else {
                if !line.trim().is_empty() {
                    tracing::warn!(line = line_number, "skipping malformed log line");
                }
                continue;
            };
            if rec.key == key {
                result.last_value = Some(rec.value.to_string());
                result.lines.push(line_number);
            }
        }

        Ok(result)
    }

    fn read_lines(&self) -> Result<Vec<String>> {
        let Some(reader) = self.open_reader()? else {
            return Ok(Vec::new());
        };
        reader
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .map_err(LineKvError::from)
    }

    /// Replace the log with `lines` via temp file + rename
    ///
    /// The temp file gets a fresh unique name next to the log, so it can
    /// never alias the log or the metadata file.
    fn rewrite(&self, lines: &[String]) -> Result<()> {
        let dir = match self.log_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;

        let mut writer = BufWriter::new(tmp);
        for line in lines {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        let tmp = writer.into_inner().map_err(|e| e.into_error())?;

        tmp.persist(&self.log_path).map_err(|e| e.error)?;
        Ok(())
    }
}
