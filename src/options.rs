//! Configuration options for copy operations.
//!
//! # Example
//!
//! ```
//! use synccopy::CopyOptions;
//!
//! let options = CopyOptions::default().with_buffer_size(1024 * 1024);
//! assert_eq!(options.buffer_size, 1024 * 1024);
//! ```

/// Default size of the intermediate copy buffer (32 KiB).
pub const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Options for copy operations.
///
/// Use [`Default::default()`] to get sensible defaults, then customize
/// using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `buffer_size` | 32 KiB | Bytes read per chunk while streaming |
///
/// Permission copying and the final flush are not optional: a successful
/// copy always carries the source mode and has been synced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CopyOptions {
    /// Size of the intermediate buffer used to stream file contents
    ///
    /// Memory use is bounded by this value regardless of file size.
    /// A value of 0 is treated as 1.
    pub buffer_size: usize,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }
}

impl CopyOptions {
    /// Set the size of the intermediate copy buffer
    #[must_use]
    pub fn with_buffer_size(mut self, bytes: usize) -> Self {
        self.buffer_size = bytes;
        self
    }
}
