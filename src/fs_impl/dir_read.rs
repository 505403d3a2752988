//! Directory listing.

use crate::errors::ExplorerResult;
use std::fs;
use std::path::Path;

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntryInfo {
    /// Render the entry the way the listing prints it: a `[DIR] ` marker for
    /// directories, six spaces for everything else.
    pub fn render(&self) -> String {
        if self.is_dir {
            format!("[DIR] {}", self.name)
        } else {
            format!("      {}", self.name)
        }
    }
}

/// Read the immediate children of a directory, sorted by name.
/// Symlinks to directories count as directories.
pub fn read_dir(path: &Path) -> ExplorerResult<Vec<DirEntryInfo>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let entry_path = entry.path();
        // Follow links for the marker, fall back to the link itself when dangling
        let is_dir = match fs::metadata(&entry_path) {
            Ok(meta) => meta.is_dir(),
            Err(_) => entry.file_type()?.is_dir(),
        };

        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    log::debug!("Listed {} entries in {}", entries.len(), path.display());
    Ok(entries)
}
