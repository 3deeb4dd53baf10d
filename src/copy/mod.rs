//! Core copy operation.
//!
//! This module provides the durable single-file copy: contents are streamed
//! through a bounded buffer, the source permission mode is applied, and the
//! destination is synced before success is reported.

mod file;
mod utils;

// Re-export public API
pub use file::{CopyStats, copy_file};
