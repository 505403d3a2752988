//! Permission inspection.
//!
//! Mode bits are decoded into `rwx` triplets for owner, group and other.
//! Platforms without POSIX mode bits report permissions as not applicable.

use crate::errors::{ExplorerError, ExplorerResult};
use std::fmt;
use std::fs;
use std::path::Path;

/// Read, write and execute bits for one class of user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionTriplet {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl PermissionTriplet {
    /// Decode the low three bits of `bits`
    pub fn from_bits(bits: u32) -> Self {
        Self {
            read: bits & 0o4 != 0,
            write: bits & 0o2 != 0,
            execute: bits & 0o1 != 0,
        }
    }
}

impl fmt::Display for PermissionTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            if self.read { 'r' } else { '-' },
            if self.write { 'w' } else { '-' },
            if self.execute { 'x' } else { '-' }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionSet {
    pub owner: PermissionTriplet,
    pub group: PermissionTriplet,
    pub other: PermissionTriplet,
}

impl PermissionSet {
    pub fn from_mode(mode: u32) -> Self {
        Self {
            owner: PermissionTriplet::from_bits(mode >> 6),
            group: PermissionTriplet::from_bits(mode >> 3),
            other: PermissionTriplet::from_bits(mode),
        }
    }

    /// `rwx` for the owner only, or the nine-character `ls` form
    pub fn render(&self, owner_only: bool) -> String {
        if owner_only {
            self.owner.to_string()
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for PermissionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.owner, self.group, self.other)
    }
}

/// Permission bits of an existing entry, following symlinks.
///
/// Returns `Ok(None)` on platforms without POSIX mode bits and
/// `ExplorerError::NotFound` when nothing exists at `path`.
pub fn get_permissions(path: &Path) -> ExplorerResult<Option<PermissionSet>> {
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ExplorerError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(mode_of(&metadata).map(PermissionSet::from_mode))
}

#[cfg(unix)]
fn mode_of(metadata: &fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn mode_of(_metadata: &fs::Metadata) -> Option<u32> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_from_mode() {
        let set = PermissionSet::from_mode(0o754);
        assert_eq!(set.to_string(), "rwxr-xr--");
        assert_eq!(set.render(true), "rwx");
        assert!(set.group.execute);
        assert!(!set.other.write);
    }

    #[test]
    fn test_from_mode_ignores_file_type_bits() {
        // Regular file type bits above the permission bits
        let set = PermissionSet::from_mode(0o100644);
        assert_eq!(set.to_string(), "rw-r--r--");
    }

    #[test]
    fn test_no_permissions() {
        assert_eq!(PermissionSet::from_mode(0).to_string(), "---------");
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = get_permissions(&temp_dir.path().join("missing"));
        assert!(matches!(result, Err(ExplorerError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_owner_bits() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("plain.txt");
        fs::write(&path, b"").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        let set = get_permissions(&path).unwrap().unwrap();

        assert_eq!(set.render(true), "rw-");
        assert_eq!(set.to_string(), "rw-r-----");
    }

    #[cfg(unix)]
    #[test]
    fn test_executable_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("run.sh");
        fs::write(&path, b"#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();

        let set = get_permissions(&path).unwrap().unwrap();
        assert!(set.owner.execute);
        assert_eq!(set.to_string(), "rwxr-xr-x");
    }
}
