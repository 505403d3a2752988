//! File copy and move operations.

use crate::errors::{ExplorerError, ExplorerResult};
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Copy a regular file, replacing the destination if it exists.
/// When `dst_path` is an existing directory the file is copied into it
/// under its own name. Returns the number of bytes copied.
pub fn copy_file(src_path: &Path, dst_path: &Path) -> ExplorerResult<u64> {
    let metadata = fs::metadata(src_path)?;
    if !metadata.is_file() {
        return Err(ExplorerError::Fs(format!(
            "{} is not a regular file",
            src_path.display()
        )));
    }

    let target = copy_target(src_path, dst_path)?;
    let dst_path: &Path = &target;

    // Copying a file onto itself would truncate it first
    if let (Ok(src), Ok(dst)) = (fs::canonicalize(src_path), fs::canonicalize(dst_path))
        && src == dst
    {
        return Err(ExplorerError::Fs(format!(
            "{} and {} are the same file",
            src_path.display(),
            dst_path.display()
        )));
    }

    let bytes_copied = fs::copy(src_path, dst_path)?;
    log::debug!(
        "Copied {bytes_copied} bytes from {} to {}",
        src_path.display(),
        dst_path.display()
    );
    Ok(bytes_copied)
}

fn copy_target<'a>(src_path: &Path, dst_path: &'a Path) -> ExplorerResult<Cow<'a, Path>> {
    if !dst_path.is_dir() {
        return Ok(Cow::Borrowed(dst_path));
    }
    let file_name = src_path.file_name().ok_or_else(|| {
        ExplorerError::Path(format!("{} has no file name", src_path.display()))
    })?;
    Ok(Cow::Owned(dst_path.join(file_name)))
}

/// Rename a file or directory.
///
/// Uses the platform rename primitive only, so moving across filesystems
/// fails with the platform's cross-device error instead of copying.
pub fn move_file(src_path: &Path, dst_path: &Path) -> ExplorerResult<()> {
    fs::rename(src_path, dst_path)?;
    log::debug!("Moved {} to {}", src_path.display(), dst_path.display());
    Ok(())
}
