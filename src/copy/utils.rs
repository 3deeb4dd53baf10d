//! Utility functions for the file copy pipeline.
//!
//! This module contains the bounded-buffer stream copy and the
//! platform-specific pieces of opening the destination.

use std::fs::{File, OpenOptions, Permissions};
use std::io::{self, Read, Write};
use std::path::Path;

// =============================================================================
// File content copying
// =============================================================================

/// Copy everything from `reader` into `writer` through a buffer of
/// `buffer_size` bytes.
///
/// Memory use is bounded by `buffer_size` regardless of the input length.
/// Reads interrupted by a signal are retried; any other error is returned
/// immediately, after which `writer` may hold a prefix of the input.
pub(crate) fn stream_copy<R, W>(
    reader: &mut R,
    writer: &mut W,
    buffer_size: usize,
) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = vec![0u8; buffer_size.max(1)];
    let mut copied: u64 = 0;

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        writer.write_all(&buf[..n])?;
        copied += n as u64;
    }

    writer.flush()?;
    Ok(copied)
}

// =============================================================================
// Destination handling
// =============================================================================

/// Open `dst` for writing, creating it with `perms` or truncating it.
///
/// On Unix the creation mode is the source mode; the process umask may
/// still clear bits, and an existing file keeps its old mode, which is why
/// the caller re-applies `perms` after the copy.
pub(crate) fn open_destination(dst: &Path, perms: &Permissions) -> io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(mode_bits(perms));
    }
    #[cfg(not(unix))]
    {
        let _ = perms; // applied after the copy
    }

    opts.open(dst)
}

/// Permission bits as an integer mode (Unix only).
#[cfg(unix)]
#[inline]
pub(crate) fn mode_bits(perms: &Permissions) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    // Strip the file type bits that st_mode carries
    perms.mode() & 0o7777
}

// =============================================================================
// Tests
// =============================================================================
