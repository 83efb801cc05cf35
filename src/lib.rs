//! # LineKV
//!
//! A minimal persistent key-value store with:
//! - A flat append-only text log as the single source of truth
//! - Linear-scan reads (last write wins)
//! - Delete by atomic full-file rewrite
//! - A pluggable index builder notified on every write
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Console                              │
//! │                (write / read / delete)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                     RecordStore                             │
//! │         append · linear scan · rewrite-on-delete            │
//! └──────────┬─────────────────────────────────┬────────────────┘
//!            │                                 │ on write
//!            ▼                                 ▼
//!   ┌─────────────────┐              ┌──────────────────┐
//!   │   store (log)   │              │   IndexBuilder   │
//!   │  key : value,   │              │  (OffsetIndex)   │
//!   └─────────────────┘              └────────┬─────────┘
//!                                             ▼
//!                                    ┌──────────────────┐
//!                                    │    store.meta    │
//!                                    │  JSON stream     │
//!                                    └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod index;
pub mod store;
pub mod bootstrap;
pub mod console;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LineKvError, Result};
pub use config::Config;
pub use index::{IndexBuilder, IndexEntry, OffsetIndex};
pub use store::{Lookup, RecordStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of LineKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
