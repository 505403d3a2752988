//! IO error path tests
//!
//! Failures raised by real filesystem calls must surface as `ExplorerError`
//! values that keep the platform message.

use crate::config::SearchConfig;
use crate::errors::ExplorerError;
use crate::fs_impl::{attr_ops, dir_read, file_copy, file_create, search};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_list_vanished_directory() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().join("short_lived");
    fs::create_dir(&dir).unwrap();
    fs::remove_dir(&dir).unwrap();

    let err = dir_read::read_dir(&dir).unwrap_err();
    assert!(matches!(err, ExplorerError::Io(_)));
    assert!(!err.message().is_empty());
}

#[test]
fn test_list_on_regular_file() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();

    assert!(dir_read::read_dir(&file).is_err());
}

#[test]
fn test_search_rooted_at_file() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();

    assert!(search::search(&file, "plain.txt", &SearchConfig::default()).is_err());
}

#[test]
fn test_copy_error_keeps_platform_message() {
    let temp_dir = tempdir().unwrap();
    let err = file_copy::copy_file(
        &temp_dir.path().join("absent.txt"),
        &temp_dir.path().join("copy.txt"),
    )
    .unwrap_err();

    assert!(err.is_not_found());
    assert!(format!("{err}").starts_with("I/O error: "));
    assert!(format!("{err}").ends_with(&err.message()));
}

#[test]
fn test_move_onto_non_empty_directory_fails() {
    let temp_dir = tempdir().unwrap();
    let src = temp_dir.path().join("src_dir");
    let dst = temp_dir.path().join("dst_dir");
    fs::create_dir(&src).unwrap();
    fs::create_dir(&dst).unwrap();
    fs::write(dst.join("occupied.txt"), b"x").unwrap();

    assert!(file_copy::move_file(&src, &dst).is_err());
    assert!(src.exists());
    assert!(dst.join("occupied.txt").exists());
}

#[test]
fn test_delete_through_missing_parent() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("no_parent/child.txt");
    // Absent parent means absent target, not an error
    assert!(!file_create::remove_entry(&path).unwrap());
}

#[test]
fn test_permissions_through_file_parent() {
    let temp_dir = tempdir().unwrap();
    let file = temp_dir.path().join("plain.txt");
    fs::write(&file, b"x").unwrap();

    // plain.txt/child: the parent is not a directory
    let result = attr_ops::get_permissions(&file.join("child"));
    assert!(result.is_err());
}
