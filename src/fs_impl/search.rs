//! Recursive search by exact base name.

use crate::config::SearchConfig;
use crate::errors::ExplorerResult;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of a recursive search
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchReport {
    /// Every entry whose base name matched, in traversal order
    pub matches: Vec<PathBuf>,
    /// Entries below the root that could not be read and were skipped
    pub skipped_dirs: usize,
}

impl SearchReport {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Walk `root` depth-first and collect every entry named exactly `name`.
///
/// Children are visited in name order. Directory symlinks are only entered
/// when `config.follow_symlinks` is set; walkdir then refuses to re-enter an
/// ancestor, so link cycles terminate. A failure to read `root` itself is an
/// error, failures below it are logged and counted in the report.
pub fn search(
    root: &Path,
    name: impl AsRef<OsStr>,
    config: &SearchConfig,
) -> ExplorerResult<SearchReport> {
    let name = name.as_ref();
    fs::read_dir(root)?;

    let mut walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(config.follow_symlinks)
        .sort_by_file_name();
    if let Some(max_depth) = config.max_depth {
        walker = walker.max_depth(max_depth);
    }

    let mut report = SearchReport::default();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_name() == name {
                    report.matches.push(entry.into_path());
                }
            }
            Err(e) if e.loop_ancestor().is_some() => {
                log::debug!("Not revisiting {e}");
            }
            Err(e) => {
                let path = e.path().map(|p| p.display().to_string()).unwrap_or_default();
                log::warn!("Skipping unreadable entry {path}: {e}");
                report.skipped_dirs += 1;
            }
        }
    }

    log::debug!(
        "Search for {name:?} under {} found {} match(es), skipped {}",
        root.display(),
        report.matches.len(),
        report.skipped_dirs
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn default_config() -> SearchConfig {
        SearchConfig::default()
    }

    #[test]
    fn test_search_nested_target() {
        let temp_dir = tempdir().unwrap();
        let deep = temp_dir.path().join("a/b/c");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("target.txt"), b"x").unwrap();
        fs::write(temp_dir.path().join("a/target.txt.bak"), b"x").unwrap();
        fs::write(temp_dir.path().join("a/b/my_target.txt"), b"x").unwrap();

        let report = search(temp_dir.path(), "target.txt", &default_config()).unwrap();

        assert_eq!(report.matches, vec![deep.join("target.txt")]);
        assert_eq!(report.skipped_dirs, 0);
    }

    #[test]
    fn test_search_reports_every_match_in_order() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("x/y")).unwrap();
        fs::create_dir_all(temp_dir.path().join("b")).unwrap();
        fs::write(temp_dir.path().join("notes.md"), b"").unwrap();
        fs::write(temp_dir.path().join("b/notes.md"), b"").unwrap();
        fs::write(temp_dir.path().join("x/y/notes.md"), b"").unwrap();

        let report = search(temp_dir.path(), "notes.md", &default_config()).unwrap();

        assert_eq!(
            report.matches,
            vec![
                temp_dir.path().join("b/notes.md"),
                temp_dir.path().join("notes.md"),
                temp_dir.path().join("x/y/notes.md"),
            ]
        );
    }

    #[test]
    fn test_search_matches_directories_too() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("src/build")).unwrap();

        let report = search(temp_dir.path(), "build", &default_config()).unwrap();
        assert_eq!(report.matches, vec![temp_dir.path().join("src/build")]);
    }

    #[test]
    fn test_search_no_match() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("other.txt"), b"").unwrap();

        let report = search(temp_dir.path(), "target.txt", &default_config()).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn test_search_missing_root_is_error() {
        let temp_dir = tempdir().unwrap();
        let result = search(&temp_dir.path().join("gone"), "x", &default_config());
        assert!(result.is_err());
    }

    #[test]
    fn test_search_max_depth() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir_all(temp_dir.path().join("a/b")).unwrap();
        fs::write(temp_dir.path().join("hit"), b"").unwrap();
        fs::write(temp_dir.path().join("a/hit"), b"").unwrap();
        fs::write(temp_dir.path().join("a/b/hit"), b"").unwrap();

        let config = SearchConfig {
            follow_symlinks: false,
            max_depth: Some(2),
        };
        let report = search(temp_dir.path(), "hit", &config).unwrap();

        assert_eq!(
            report.matches,
            vec![temp_dir.path().join("a/hit"), temp_dir.path().join("hit")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_search_does_not_follow_symlinks_by_default() {
        let temp_dir = tempdir().unwrap();
        fs::create_dir(temp_dir.path().join("real")).unwrap();
        fs::write(temp_dir.path().join("real/hit"), b"").unwrap();
        std::os::unix::fs::symlink(temp_dir.path().join("real"), temp_dir.path().join("alias"))
            .unwrap();

        let report = search(temp_dir.path(), "hit", &default_config()).unwrap();
        assert_eq!(report.matches, vec![temp_dir.path().join("real/hit")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_search_symlink_cycle_terminates() {
        let temp_dir = tempdir().unwrap();
        let inner = temp_dir.path().join("inner");
        fs::create_dir(&inner).unwrap();
        fs::write(inner.join("hit"), b"").unwrap();
        // inner/loop -> root
        std::os::unix::fs::symlink(temp_dir.path(), inner.join("loop")).unwrap();

        let config = SearchConfig {
            follow_symlinks: true,
            max_depth: None,
        };
        let report = search(temp_dir.path(), "hit", &config).unwrap();

        assert_eq!(report.matches, vec![inner.join("hit")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_search_follows_symlink_to_outside_dir() {
        let temp_dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("hit"), b"").unwrap();
        std::os::unix::fs::symlink(outside.path(), temp_dir.path().join("ext")).unwrap();

        let config = SearchConfig {
            follow_symlinks: true,
            max_depth: None,
        };
        let report = search(temp_dir.path(), "hit", &config).unwrap();
        assert_eq!(report.matches, vec![temp_dir.path().join("ext/hit")]);
    }

    #[test]
    fn test_search_deep_tree() {
        let temp_dir = tempdir().unwrap();
        let deep = (0..200).fold(temp_dir.path().to_path_buf(), |p, i| p.join(format!("d{i}")));
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("needle"), b"").unwrap();
        fs::write(temp_dir.path().join("d0/needle"), b"").unwrap();

        let report = search(temp_dir.path(), "needle", &default_config()).unwrap();

        assert_eq!(
            report.matches,
            vec![deep.join("needle"), temp_dir.path().join("d0/needle")]
        );
        assert_eq!(report.skipped_dirs, 0);
    }
}
