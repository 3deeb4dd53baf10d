//! Single file copy operation.
//!
//! This module provides [`copy_file`], which copies one file's contents and
//! permission mode and syncs the destination before reporting success.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::{File, Permissions};
use std::path::Path;
use std::time::{Duration, Instant};

use super::utils::{open_destination, stream_copy};

/// Statistics from a successful copy.
#[derive(Debug, Clone)]
pub struct CopyStats {
    /// Number of bytes written to the destination
    pub bytes_copied: u64,
    /// Permissions applied to the destination (the source's at inspection time)
    pub permissions: Permissions,
    /// Wall-clock time of the whole operation, including the flush
    pub duration: Duration,
}

impl CopyStats {
    /// Permission bits applied to the destination, e.g. `0o644`.
    #[cfg(unix)]
    #[must_use]
    pub fn mode(&self) -> u32 {
        super::utils::mode_bits(&self.permissions)
    }
}

/// Copy a single file and flush it to stable storage.
///
/// The steps run strictly in order and the first failure aborts the copy:
///
/// 1. open `src` read-only
/// 2. read its metadata and capture its permissions
/// 3. open `dst` for writing (create or truncate), created with the source mode
/// 4. stream the contents through a buffer of [`CopyOptions::buffer_size`] bytes
/// 5. set the destination permissions to the captured source permissions
/// 6. `fsync` the destination
///
/// Both files are closed on every return path. The destination is never
/// touched unless the source was opened and inspected successfully.
///
/// # Arguments
///
/// * `src` - Source file path
/// * `dst` - Destination file path
/// * `options` - Copy options
///
/// # Errors
///
/// Returns the error for the first failing step:
/// - [`Error::SourceOpen`]
/// - [`Error::Metadata`]
/// - [`Error::DestinationOpen`]
/// - [`Error::Copy`] (the destination may hold partial content)
/// - [`Error::PermissionSet`]
/// - [`Error::Flush`]
///
/// # Example
///
/// ```no_run
/// use synccopy::{copy_file, CopyOptions};
/// use std::path::Path;
///
/// let stats = copy_file(
///     Path::new("source.txt"),
///     Path::new("destination.txt"),
///     &CopyOptions::default(),
/// )?;
/// println!("copied {} bytes", stats.bytes_copied);
/// # Ok::<(), synccopy::Error>(())
/// ```
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let result = copy_file_internal(src, dst, options);

    #[cfg(feature = "tracing")]
    if let Err(ref e) = result {
        tracing::warn!(
            src = %src.display(),
            dst = %dst.display(),
            code = %e.code(),
            error = %e.io_error(),
            "copy aborted"
        );
    }

    result
}

fn copy_file_internal(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyStats> {
    let start = Instant::now();

    let mut src_file = File::open(src).map_err(|e| Error::SourceOpen {
        path: src.to_path_buf(),
        source: e,
    })?;

    let src_meta = src_file.metadata().map_err(|e| Error::Metadata {
        path: src.to_path_buf(),
        source: e,
    })?;
    let perms = src_meta.permissions();

    #[cfg(feature = "tracing")]
    tracing::debug!(src = %src.display(), len = src_meta.len(), "opened source");

    let mut dst_file = open_destination(dst, &perms).map_err(|e| Error::DestinationOpen {
        path: dst.to_path_buf(),
        source: e,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(dst = %dst.display(), "opened destination");

    let bytes_copied = stream_copy(&mut src_file, &mut dst_file, options.buffer_size)
        .map_err(|e| Error::Copy {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
            source: e,
        })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = bytes_copied, "streamed contents");

    // Creation mode is subject to umask and ignored for existing files
    dst_file
        .set_permissions(perms.clone())
        .map_err(|e| Error::PermissionSet {
            path: dst.to_path_buf(),
            source: e,
        })?;

    dst_file.sync_all().map_err(|e| Error::Flush {
        path: dst.to_path_buf(),
        source: e,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(dst = %dst.display(), "destination synced");

    Ok(CopyStats {
        bytes_copied,
        permissions: perms,
        duration: start.elapsed(),
    })
}

// =============================================================================
// Tests
// =============================================================================
