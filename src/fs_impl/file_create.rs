//! File creation and removal.

use crate::errors::{ExplorerError, ExplorerResult};
use crate::fs_impl::path_ops::names_entry;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Create an empty regular file, truncating it if it already exists.
pub fn create_file(path: &Path) -> ExplorerResult<()> {
    require_entry_name(path)?;

    fs::File::create(path)?;
    log::debug!("Created {}", path.display());
    Ok(())
}

/// Remove a single file, symlink or empty directory.
///
/// Returns `Ok(false)` when nothing existed at `path`. Removing a non-empty
/// directory is an error; there is no recursive removal. A path that ends in
/// a separator, `.` or `..` is rejected before anything is touched.
pub fn remove_entry(path: &Path) -> ExplorerResult<bool> {
    require_entry_name(path)?;

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e.into()),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {
            log::debug!("Removed {}", path.display());
            Ok(true)
        }
        // Lost a race with another process
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn require_entry_name(path: &Path) -> ExplorerResult<()> {
    if path.as_os_str().is_empty() || !names_entry(path) {
        return Err(ExplorerError::Path(format!(
            "{} does not name a file",
            path.display()
        )));
    }
    Ok(())
}
