//! Error types for synccopy.
//!
//! This module provides the [`Error`] enum with one variant per step of the
//! copy pipeline, the stable [`ErrorCode`] identifiers for those variants,
//! and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Step | Error | Code |
//! |------|-------|------|
//! | Open source | [`Error::SourceOpen`] | `source_open` |
//! | Inspect source | [`Error::Metadata`] | `metadata` |
//! | Open destination | [`Error::DestinationOpen`] | `destination_open` |
//! | Stream bytes | [`Error::Copy`] | `copy` |
//! | Apply mode | [`Error::PermissionSet`] | `permission_set` |
//! | Flush | [`Error::Flush`] | `flush` |

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for synccopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Whether an IO error means the destination device is full.
///
/// Matches [`io::ErrorKind::StorageFull`] as well as the raw OS code
/// (`ENOSPC` on Unix, `ERROR_DISK_FULL` on Windows), since the kind is not
/// always populated for errors surfaced by `write` or `fsync`.
///
/// # Example
///
/// ```
/// use std::io;
/// use synccopy::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    #[cfg(unix)]
    const DEVICE_FULL: Option<i32> = Some(28); // ENOSPC
    #[cfg(windows)]
    const DEVICE_FULL: Option<i32> = Some(112); // ERROR_DISK_FULL
    #[cfg(not(any(unix, windows)))]
    const DEVICE_FULL: Option<i32> = None;

    error.kind() == io::ErrorKind::StorageFull
        || (DEVICE_FULL.is_some() && error.raw_os_error() == DEVICE_FULL)
}

/// Stable, machine-readable identifier for each [`Error`] variant.
///
/// The string forms returned by [`ErrorCode::as_str`] are part of the
/// public contract and are what the `synccp` binary prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The source could not be opened for reading
    SourceOpen,
    /// The source metadata could not be read
    Metadata,
    /// The destination could not be created, opened, or truncated
    DestinationOpen,
    /// Streaming bytes between the two files failed
    Copy,
    /// The destination permission mode could not be set
    PermissionSet,
    /// The durability flush failed
    Flush,
}

impl ErrorCode {
    /// Snake-case name of this code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceOpen => "source_open",
            Self::Metadata => "metadata",
            Self::DestinationOpen => "destination_open",
            Self::Copy => "copy",
            Self::PermissionSet => "permission_set",
            Self::Flush => "flush",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while copying a file.
///
/// Each variant corresponds to exactly one step of the copy and carries the
/// path involved plus the underlying [`io::Error`], reachable through
/// [`std::error::Error::source`] or [`Error::io_error`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Source path missing, unreadable, or otherwise inaccessible
    #[error("Failed to open source {path}: {source}")]
    SourceOpen {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Source metadata could not be read after a successful open
    #[error("Failed to read metadata of {path}: {source}")]
    Metadata {
        /// Source path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Destination could not be created, opened, or truncated
    #[error("Failed to open destination {path}: {source}")]
    DestinationOpen {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// I/O failure while streaming bytes
    ///
    /// The destination may already hold a prefix of the source content;
    /// it is not removed.
    #[error("Failed to copy {src} to {dst}: {source}")]
    Copy {
        /// Source path
        src: PathBuf,
        /// Destination path
        dst: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Setting the destination permission mode failed
    #[error("Failed to set permissions on {path}: {source}")]
    PermissionSet {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Flushing the destination to stable storage failed
    #[error("Failed to flush {path} to disk: {source}")]
    Flush {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },
}

impl Error {
    /// The stable code identifying which step failed.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SourceOpen { .. } => ErrorCode::SourceOpen,
            Self::Metadata { .. } => ErrorCode::Metadata,
            Self::DestinationOpen { .. } => ErrorCode::DestinationOpen,
            Self::Copy { .. } => ErrorCode::Copy,
            Self::PermissionSet { .. } => ErrorCode::PermissionSet,
            Self::Flush { .. } => ErrorCode::Flush,
        }
    }

    /// The underlying IO error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::SourceOpen { source, .. }
            | Self::Metadata { source, .. }
            | Self::DestinationOpen { source, .. }
            | Self::Copy { source, .. }
            | Self::PermissionSet { source, .. }
            | Self::Flush { source, .. } => source,
        }
    }

    /// The path the failing step operated on.
    ///
    /// For [`Error::Copy`] this is the destination, since that is the file
    /// left in a partial state.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceOpen { path, .. }
            | Self::Metadata { path, .. }
            | Self::DestinationOpen { path, .. }
            | Self::PermissionSet { path, .. }
            | Self::Flush { path, .. } => path,
            Self::Copy { dst, .. } => dst,
        }
    }

    /// Whether the underlying cause is a full destination device.
    #[must_use]
    pub fn is_no_space(&self) -> bool {
        is_no_space_error(self.io_error())
    }
}
