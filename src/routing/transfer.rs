// SPDX-License-Identifier: MPL-2.0
//! File copy and move primitives used by routing.

use std::fs::{self, File, FileTimes, Metadata, OpenOptions};
use std::io;
use std::path::Path;

/// Copies `from` to `to`, carrying over permissions and access/modification times.
///
/// `to` must not exist: the file is created exclusively, so a name taken
/// after it was resolved fails with [`io::ErrorKind::AlreadyExists`] instead
/// of being overwritten. A partially written copy is removed on failure.
pub fn copy_with_metadata(from: &Path, to: &Path) -> io::Result<u64> {
    let mut reader = File::open(from)?;
    let metadata = reader.metadata()?;
    let mut writer = OpenOptions::new().write(true).create_new(true).open(to)?;

    match write_copy(&mut reader, &mut writer, &metadata) {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            drop(writer);
            if let Err(cleanup) = fs::remove_file(to) {
                tracing::warn!(path = %to.display(), error = %cleanup, "failed to remove partial copy");
            }
            Err(err)
        }
    }
}

fn write_copy(reader: &mut File, writer: &mut File, metadata: &Metadata) -> io::Result<u64> {
    let bytes = io::copy(reader, writer)?;

    let mut times = FileTimes::new();
    if let Ok(accessed) = metadata.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = metadata.modified() {
        times = times.set_modified(modified);
    }
    writer.set_times(times)?;
    // Permissions last: a read-only source must not block the writes above.
    writer.set_permissions(metadata.permissions())?;

    Ok(bytes)
}

/// Moves `from` to `to`.
///
/// Uses a rename when both paths are on the same filesystem, otherwise falls
/// back to [`copy_with_metadata`] followed by removing the source.
pub fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            tracing::debug!(
                from = %from.display(),
                to = %to.display(),
                "rename crosses devices, copying instead"
            );
            copy_then_remove(from, to, |path| fs::remove_file(path))
        }
        Err(err) => Err(err),
    }
}

/// Copies `from` to `to`, then removes `from` with `remove_source`.
///
/// If the source cannot be removed, the copy is deleted again so the file
/// ends up in exactly one place, and the removal error is returned.
fn copy_then_remove<F>(from: &Path, to: &Path, remove_source: F) -> io::Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    copy_with_metadata(from, to)?;

    if let Err(err) = remove_source(from) {
        if let Err(cleanup) = fs::remove_file(to) {
            tracing::warn!(path = %to.display(), error = %cleanup, "failed to roll back copy");
        }
        return Err(err);
    }
    Ok(())
}
