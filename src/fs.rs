use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PatchError, Result};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(|e| PatchError::io_error(e, Some(path)))
}

/// Write string content to a file through a sibling temp file and a rename,
/// so the target is never left half-written.
///
/// Symlinks are followed: the file they point to is replaced, the link stays.
/// A read-only target is refused the same way a plain write would be.
pub fn write_file_atomic(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing file atomically: {}", path.display());

    let target = resolve_target(path)?;
    let io_error = |e| PatchError::io_error(e, Some(path));

    let metadata = match fs::metadata(&target) {
        Ok(metadata) => Some(metadata),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(io_error(e)),
    };

    if let Some(metadata) = &metadata {
        if metadata.permissions().readonly() {
            return Err(io_error(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", target.display()),
            )));
        }
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| PatchError::io_error(e, Some(dir)))?;
    temp.write_all(content.as_bytes()).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;

    // Keep the original file's permissions
    if let Some(metadata) = metadata {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(io_error)?;
    }

    temp.persist(&target).map_err(|e| io_error(e.error))?;

    Ok(())
}

/// Follow symlinks for an existing path; new files are written where named
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(_) => fs::canonicalize(path).map_err(|e| PatchError::io_error(e, Some(path))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(PatchError::io_error(e, Some(path))),
    }
}
