// SPDX-License-Identifier: MPL-2.0
//! Routing sends one image from the source folder into a destination folder.
//!
//! The target name comes from [`unique_path::resolve`], so routing never
//! overwrites an existing file. Whether the source is kept depends on the
//! [`RoutingMode`].

pub mod transfer;
pub mod unique_path;

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};

/// Copy versus move, applied to every routing until toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingMode {
    Copy,
    #[default]
    Move,
}

impl RoutingMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            RoutingMode::Copy => RoutingMode::Move,
            RoutingMode::Move => RoutingMode::Copy,
        }
    }

    pub fn is_copy(self) -> bool {
        self == RoutingMode::Copy
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingMode::Copy => write!(f, "COPY"),
            RoutingMode::Move => write!(f, "MOVE"),
        }
    }
}

/// Copies or moves `source_dir/filename` into `dest_dir` and returns the new path.
///
/// # Errors
///
/// Returns [`Error::Transfer`] if no free name is found or the copy/move fails.
/// On failure the source file is left where it was.
pub fn route_file(
    source_dir: &Path,
    filename: &str,
    dest_dir: &Path,
    mode: RoutingMode,
) -> Result<PathBuf> {
    let from = source_dir.join(filename);
    let to = unique_path::resolve(dest_dir, filename)?;

    let outcome = match mode {
        RoutingMode::Copy => transfer::copy_with_metadata(&from, &to).map(|_| ()),
        RoutingMode::Move => transfer::move_file(&from, &to),
    };

    match outcome {
        Ok(()) => {
            tracing::info!(%mode, from = %from.display(), to = %to.display(), "routed image");
            Ok(to)
        }
        Err(source) => Err(Error::Transfer { from, to, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(RoutingMode::Copy.toggled(), RoutingMode::Move);
        assert_eq!(RoutingMode::Move.toggled(), RoutingMode::Copy);
    }

    #[test]
    fn default_mode_is_move() {
        assert_eq!(RoutingMode::default(), RoutingMode::Move);
        assert!(!RoutingMode::default().is_copy());
    }

    #[test]
    fn display_matches_status_bar_labels() {
        assert_eq!(RoutingMode::Copy.to_string(), "COPY");
        assert_eq!(RoutingMode::Move.to_string(), "MOVE");
    }

    #[test]
    fn route_copy_renames_on_collision_and_keeps_source() {
        let source = tempdir().expect("source dir");
        let dest = tempdir().expect("dest dir");
        fs::write(source.path().join("a.jpg"), b"new").expect("write source");
        fs::write(dest.path().join("a.jpg"), b"old").expect("write existing");

        let target = route_file(source.path(), "a.jpg", dest.path(), RoutingMode::Copy)
            .expect("route failed");

        assert_eq!(target, dest.path().join("a (2).jpg"));
        assert_eq!(fs::read(&target).expect("read target"), b"new");
        assert_eq!(fs::read(dest.path().join("a.jpg")).expect("read old"), b"old");
        assert!(source.path().join("a.jpg").exists());
    }

    #[test]
    fn route_move_removes_source() {
        let source = tempdir().expect("source dir");
        let dest = tempdir().expect("dest dir");
        fs::write(source.path().join("b.png"), b"png").expect("write source");

        let target = route_file(source.path(), "b.png", dest.path(), RoutingMode::Move)
            .expect("route failed");

        assert_eq!(target, dest.path().join("b.png"));
        assert!(!source.path().join("b.png").exists());
    }

    #[test]
    fn route_into_missing_destination_reports_transfer_error() {
        let source = tempdir().expect("source dir");
        fs::write(source.path().join("c.gif"), b"gif").expect("write source");
        let missing = source.path().join("no-such-dir");

        let result = route_file(source.path(), "c.gif", &missing, RoutingMode::Move);

        assert!(matches!(result, Err(Error::Transfer { .. })));
        assert!(source.path().join("c.gif").exists());
    }
}
