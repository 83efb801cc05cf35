//! Index Module
//!
//! Auxiliary metadata derived from write events, kept apart from the
//! primary log.
//!
//! ## Responsibilities
//! - Receive a notification for every successful log append
//! - Persist whatever bookkeeping the strategy needs
//! - Never influence what `RecordStore::read_key` returns
//!
//! ## Metadata File Format (offset index)
//! ```text
//! {
//!     "key": "foo",
//!     "offset": 3
//! }
//! {
//!     "key": "foo",
//!     "offset": 6
//! }
//! ```
//! A stream of independently decodable JSON objects, not a JSON array.
//!
//! Deletes do not touch the index: entries for removed records stay behind
//! with stale offsets.

mod offset;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use offset::OffsetIndex;

/// One record of the offset metadata stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub key: String,

    /// Cumulative value bytes written up to and including this key's value
    pub offset: u64,
}

/// Indexing strategy consulted by the record store on writes
///
/// Implementations must be safe to share between threads; the store holds
/// its own write lock around `write_key_index` calls.
pub trait IndexBuilder: Send + Sync {
    /// Record that `value_len` bytes of value were appended for `key`
    fn write_key_index(&self, key: &str, value_len: usize) -> Result<()>;

    /// Most recent offset recorded for `key`
    ///
    /// Bookkeeping only: reads still scan the log.
    fn read_index(&self, key: &str) -> Result<u64>;
}

impl<T: IndexBuilder + ?Sized> IndexBuilder for Box<T> {
    fn write_key_index(&self, key: &str, value_len: usize) -> Result<()> {
        (**self).write_key_index(key, value_len)
    }

    fn read_index(&self, key: &str) -> Result<u64> {
        (**self).read_index(key)
    }
}

impl<T: IndexBuilder + ?Sized> IndexBuilder for Arc<T> {
    fn write_key_index(&self, key: &str, value_len: usize) -> Result<()> {
        (**self).write_key_index(key, value_len)
    }

    fn read_index(&self, key: &str) -> Result<u64> {
        (**self).read_index(key)
    }
}
