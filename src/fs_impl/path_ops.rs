//! Path resolution and navigation.
//!
//! Every name typed at a prompt is resolved against the session's current
//! directory; an absolute name replaces it outright.

use crate::errors::{ExplorerError, ExplorerResult};
use std::fs;
use std::path::{self, Path, PathBuf};

/// Resolve a user-supplied fragment against the current directory.
/// For example `notes.txt` in `/home/me` maps to `/home/me/notes.txt`,
/// while `/etc/hosts` stays `/etc/hosts`.
pub fn resolve(current: &Path, fragment: impl AsRef<Path>) -> PathBuf {
    current.join(fragment)
}

/// Whether `path` ends in an entry name rather than a separator, `.` or `..`.
///
/// `Path::file_name` normalizes `dir/` and `dir/.` to `dir`, so an empty
/// fragment joined onto the current directory would otherwise name the
/// current directory itself.
pub fn names_entry(path: &Path) -> bool {
    let raw = path.as_os_str().as_encoded_bytes();
    let last = raw
        .rsplit(|b| path::is_separator(char::from(*b)))
        .next()
        .unwrap_or_default();
    !matches!(last, b"" | b"." | b"..")
}

/// Check that a path exists and is a directory, following symlinks.
pub fn is_existing_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Move the cursor to `fragment`, resolved against `current`.
///
/// The target must exist and be a directory. Only then is it canonicalized
/// and committed; on any failure `current` is left untouched.
pub fn change_directory<'a>(
    current: &'a mut PathBuf,
    fragment: impl AsRef<Path>,
) -> ExplorerResult<&'a Path> {
    let target = resolve(current, fragment);

    if !is_existing_dir(&target) {
        return Err(ExplorerError::Path(format!(
            "{} is not an existing directory",
            target.display()
        )));
    }

    let canonical = fs::canonicalize(&target)?;
    log::debug!(
        "Changing directory from {} to {}",
        current.display(),
        canonical.display()
    );
    *current = canonical;
    Ok(current.as_path())
}

/// Starting directory for a session: the configured one, canonicalized,
/// or the process working directory.
pub fn initial_directory(configured: Option<&str>) -> ExplorerResult<PathBuf> {
    match configured {
        Some(dir) => {
            let path = PathBuf::from(dir);
            if !is_existing_dir(&path) {
                return Err(ExplorerError::Path(format!(
                    "Start directory {dir} is not an existing directory"
                )));
            }
            Ok(fs::canonicalize(path)?)
        }
        None => std::env::current_dir()
            .map_err(|e| ExplorerError::Path(format!("Failed to get current directory: {e}"))),
    }
}
