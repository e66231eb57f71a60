// crates/pbxproj_patcher/src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of [`crate::apply_permission_patch`].
#[derive(Debug, Error)]
pub enum PatchError {
    /// The project file does not exist. Nothing was touched.
    #[error("could not find {}", path.display())]
    NotFound { path: PathBuf },

    /// No anchor statement was found. The backup was written, the project file was not.
    #[error("no build configuration in {} contains the expected anchor", path.display())]
    NoMatch { path: PathBuf, backup_path: PathBuf },

    #[error("failed to back up {} to {}", path.display(), backup_path.display())]
    Backup {
        path: PathBuf,
        backup_path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PatchError {
    /// True for environment failures (backup, read, write) as opposed to
    /// a missing file or an unexpected project layout.
    pub fn is_io_failure(&self) -> bool {
        matches!(
            self,
            PatchError::Backup { .. } | PatchError::Read { .. } | PatchError::Write { .. }
        )
    }

    /// Backup left on disk by the failed call, if any.
    pub fn backup_path(&self) -> Option<&PathBuf> {
        match self {
            PatchError::NoMatch { backup_path, .. } => Some(backup_path),
            _ => None,
        }
    }
}
