// crates/pbxproj_patcher/src/lib.rs

//! Adds the calendar usage descriptions to every build configuration of an
//! Xcode project descriptor (`project.pbxproj`).
//!
//! The descriptor is treated as opaque text: the keys are spliced in after
//! each `INFOPLIST_KEY_UISupportedInterfaceOrientations_iPhone` statement.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use calendar_permission_keys::BACKUP_SUFFIX;
use tempfile::NamedTempFile;

mod error;
mod insert;

pub use error::PatchError;
pub use insert::{insert_after_anchors, PatchOptions, PatchedText};

/// Outcome of a successful [`apply_permission_patch`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchReport {
    pub backup_path: PathBuf,
    pub matched: usize,
    pub inserted: usize,
}

/// Returns `path` with `.backup` appended to its file name.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut raw: OsString = path.as_os_str().to_owned();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Backs up the project file, then rewrites it with the calendar keys
/// inserted after every anchor.
///
/// The backup is written before the scan, so it exists even when
/// [`PatchError::NoMatch`] is returned. The project file itself is only
/// replaced when at least one block was inserted, via a temporary sibling
/// that is renamed over it. Symlinks are followed, so the link target is
/// rewritten and the link itself is kept. A read-only project file is a
/// [`PatchError::Write`], even though the rename alone would succeed.
pub fn apply_permission_patch(
    path: &Path,
    options: PatchOptions,
) -> Result<PatchReport, PatchError> {
    if !path.exists() {
        return Err(PatchError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let backup_path = backup_path_for(path);
    fs::copy(path, &backup_path).map_err(|source| PatchError::Backup {
        path: path.to_path_buf(),
        backup_path: backup_path.clone(),
        source,
    })?;
    log::info!("backed up {} to {}", path.display(), backup_path.display());

    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let patched = insert_after_anchors(&content, options);
    log::debug!(
        "{} anchor(s) matched, {} block(s) to insert",
        patched.matched,
        patched.inserted
    );

    if patched.matched == 0 {
        return Err(PatchError::NoMatch {
            path: path.to_path_buf(),
            backup_path,
        });
    }

    if patched.inserted > 0 {
        replace_contents(path, &patched.content).map_err(|source| PatchError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    } else {
        log::info!("{} is already patched, leaving it unchanged", path.display());
    }

    Ok(PatchReport {
        backup_path,
        matched: patched.matched,
        inserted: patched.inserted,
    })
}

/// Writes `content` to a temporary file next to the resolved `path` and renames it into place.
fn replace_contents(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let permissions = fs::metadata(&target)?.permissions();
    if permissions.readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{} is read-only", target.display()),
        ));
    }
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(content.as_bytes())?;
    staged.as_file().sync_all()?;
    fs::set_permissions(staged.path(), permissions)?;
    staged.persist(&target).map_err(|err| err.error)?;
    Ok(())
}
