//! # synccopy
//!
//! Durable single-file copying for Rust.
//!
//! ## Core Features
//!
//! - **Durable**: the destination is `fsync`ed before success is reported
//! - **Permission preserving**: the destination ends with the source's mode,
//!   regardless of umask or the mode of a file being overwritten
//! - **Bounded memory**: contents stream through a fixed-size buffer, so files
//!   larger than memory copy fine
//! - **Step-precise errors**: every failure names the step and path that failed
//!
//! ## Quick Start
//!
//! ```no_run
//! use synccopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("source.txt", "destination.txt").run()?;
//! println!("Copied {} bytes", stats.bytes_copied);
//! # Ok::<(), synccopy::Error>(())
//! ```
//!
//! ## Function API
//!
//! ```no_run
//! use synccopy::{copy_file, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default().with_buffer_size(256 * 1024);
//! let stats = copy_file(Path::new("in.bin"), Path::new("out.bin"), &options)?;
//! # Ok::<(), synccopy::Error>(())
//! ```
//!
//! ## Failure Semantics
//!
//! The copy is a strict pipeline: open source, read metadata, open
//! destination, stream, set mode, flush. The first failing step aborts the
//! copy and is returned as the matching [`Error`] variant. Both files are
//! always closed.
//!
//! The destination is not written atomically. If streaming fails midway,
//! the destination keeps whatever prefix was already written. Nothing is
//! retried and concurrent writers to the same destination are not
//! coordinated.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
mod options;

pub use builder::CopyBuilder;
pub use copy::{CopyStats, copy_file};
pub use error::{Error, ErrorCode, Result, is_no_space_error};
pub use options::{CopyOptions, DEFAULT_BUFFER_SIZE};
