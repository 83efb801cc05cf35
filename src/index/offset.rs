//! Offset index
//!
//! Appends one `IndexEntry` per write, carrying the running total of value
//! bytes written so far.

use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{LineKvError, Result};

use super::{IndexBuilder, IndexEntry};

/// Indentation used for each pretty-printed entry
const INDENT: &[u8] = b"    ";

/// Byte-offset-per-key index persisted as a JSON stream
///
/// The last offset is read from disk once, on the first write, and cached
/// afterwards. The cache assumes this instance is the only writer of the
/// metadata file.
pub struct OffsetIndex {
    /// Metadata file path
    path: PathBuf,

    /// Offset of the last entry on disk (`None` until first loaded)
    last_offset: Mutex<Option<u64>>,
}

impl OffsetIndex {
    /// Create an index over the metadata file at `path`
    ///
    /// The file is not touched until the first write or lookup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_offset: Mutex::new(None),
        }
    }

    /// Decode every entry in the metadata stream, in write order
    ///
    /// A missing file is an empty index.
    pub fn entries(&self) -> Result<Vec<IndexEntry>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::Deserializer::from_reader(BufReader::new(file))
            .into_iter::<IndexEntry>()
            .map(|entry| entry.map_err(LineKvError::from))
            .collect()
    }

    /// Cumulative offset after the most recent entry (0 when empty)
    pub fn last_offset(&self) -> Result<u64> {
        let mut cached = self.last_offset.lock();
        self.load_last_offset(&mut cached)
    }

    /// Get the metadata file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn load_last_offset(&self, cached: &mut Option<u64>) -> Result<u64> {
        if let Some(offset) = *cached {
            return Ok(offset);
        }
        let offset = self.entries()?.last().map(|e| e.offset).unwrap_or(0);
        tracing::debug!(path = %self.path.display(), offset, "loaded last index offset");
        *cached = Some(offset);
        Ok(offset)
    }

    /// Pretty-print one entry with 4-space indentation plus a trailing newline
    fn encode(entry: &IndexEntry) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(64);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        entry.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }
}

impl IndexBuilder for OffsetIndex {
    fn write_key_index(&self, key: &str, value_len: usize) -> Result<()> {
        let mut cached = self.last_offset.lock();
        let last = self.load_last_offset(&mut cached)?;

        let entry = IndexEntry {
            key: key.to_string(),
            offset: last + value_len as u64,
        };
        let bytes = Self::encode(&entry)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(&bytes)?;

        // Advance only once the entry is on disk
        *cached = Some(entry.offset);
        tracing::trace!(key, offset = entry.offset, "index entry appended");
        Ok(())
    }

    fn read_index(&self, key: &str) -> Result<u64> {
        self.entries()?
            .into_iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| entry.offset)
            .ok_or_else(|| LineKvError::NotFound {
                key: key.to_string(),
            })
    }
}
