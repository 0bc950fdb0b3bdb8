// SPDX-License-Identifier: MPL-2.0
//! Collision-free destination names.
//!
//! `photo.jpg` becomes `photo (2).jpg`, `photo (3).jpg`, … until a name is
//! free. The check happens before the transfer, so another process writing
//! into the destination at the same moment can still collide.

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Returns a path inside `dest_dir` for `filename` that does not exist yet.
///
/// # Errors
///
/// Returns [`Error::Transfer`] with [`io::ErrorKind::AlreadyExists`] if every
/// numbered candidate is taken.
pub fn resolve(dest_dir: &Path, filename: &str) -> Result<PathBuf> {
    let candidate = dest_dir.join(filename);
    if !is_taken(&candidate) {
        return Ok(candidate);
    }

    let name = Path::new(filename);
    let stem = name
        .file_stem()
        .map_or_else(|| OsString::from(filename), OsString::from);
    let extension = name.extension();

    for n in 2..=u64::MAX {
        let mut numbered = stem.clone();
        numbered.push(format!(" ({n})"));
        if let Some(ext) = extension {
            numbered.push(".");
            numbered.push(ext);
        }

        let candidate = dest_dir.join(numbered);
        if !is_taken(&candidate) {
            return Ok(candidate);
        }
    }

    Err(Error::Transfer {
        from: PathBuf::from(filename),
        to: dest_dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::AlreadyExists, "no free file name left"),
    })
}

/// Any directory entry counts as taken, including a dangling symlink.
fn is_taken(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"x").expect("failed to create file");
    }

    #[test]
    fn free_name_is_returned_unchanged() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = resolve(dir.path(), "a.jpg").expect("resolve failed");
        assert_eq!(path, dir.path().join("a.jpg"));
    }

    #[test]
    fn taken_name_gets_counter_starting_at_two() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.jpg");

        let path = resolve(dir.path(), "a.jpg").expect("resolve failed");
        assert_eq!(path, dir.path().join("a (2).jpg"));
    }

    #[test]
    fn counter_skips_every_taken_candidate() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "a.jpg");
        touch(dir.path(), "a (2).jpg");

        let path = resolve(dir.path(), "a.jpg").expect("resolve failed");
        assert_eq!(path, dir.path().join("a (3).jpg"));
    }

    #[test]
    fn counter_goes_before_last_extension_only() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "scan.final.png");

        let path = resolve(dir.path(), "scan.final.png").expect("resolve failed");
        assert_eq!(path, dir.path().join("scan.final (2).png"));
    }

    #[test]
    fn name_without_extension_gets_plain_counter() {
        let dir = tempdir().expect("failed to create temp dir");
        touch(dir.path(), "IMG_0001");

        let path = resolve(dir.path(), "IMG_0001").expect("resolve failed");
        assert_eq!(path, dir.path().join("IMG_0001 (2)"));
    }

    #[test]
    fn existing_directory_counts_as_taken() {
        let dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(dir.path().join("b.png")).expect("failed to create dir");

        let path = resolve(dir.path(), "b.png").expect("resolve failed");
        assert_eq!(path, dir.path().join("b (2).png"));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_counts_as_taken() {
        let dir = tempdir().expect("failed to create temp dir");
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("c.gif"))
            .expect("failed to create symlink");

        let path = resolve(dir.path(), "c.gif").expect("resolve failed");
        assert_eq!(path, dir.path().join("c (2).gif"));
    }
}
