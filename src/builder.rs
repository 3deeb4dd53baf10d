//! Builder API for ergonomic copying.
//!
//! The builder provides a fluent interface for configuring and running a
//! copy. This is often more convenient than constructing [`CopyOptions`]
//! and calling [`copy_file`](crate::copy_file) directly.
//!
//! # Examples
//!
//! ```no_run
//! use synccopy::CopyBuilder;
//!
//! let stats = CopyBuilder::new("source.txt", "destination.txt")
//!     .buffer_size(1024 * 1024)
//!     .run()?;
//! println!("Copied {} bytes in {:?}", stats.bytes_copied, stats.duration);
//! # Ok::<(), synccopy::Error>(())
//! ```

use crate::copy::{CopyStats, copy_file};
use crate::error::Result;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing a durable file copy.
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination paths.
    ///
    /// Uses [`CopyOptions::default()`].
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Set the size of the intermediate copy buffer in bytes.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use synccopy::CopyBuilder;
    ///
    /// let stats = CopyBuilder::new("big.iso", "backup.iso")
    ///     .buffer_size(4 * 1024 * 1024)
    ///     .run()?;
    /// # Ok::<(), synccopy::Error>(())
    /// ```
    #[must_use]
    pub fn buffer_size(mut self, bytes: usize) -> Self {
        self.options = self.options.with_buffer_size(bytes);
        self
    }

    /// Replace all options at once.
    #[must_use]
    pub fn with_options(mut self, options: CopyOptions) -> Self {
        self.options = options;
        self
    }

    /// Get the current options.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error, see [`copy_file`].
    pub fn run(self) -> Result<CopyStats> {
        copy_file(&self.src, &self.dst, &self.options)
    }
}
