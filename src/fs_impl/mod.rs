//! Filesystem operations behind the menu.
//!
//! Each submodule is a thin layer over std filesystem primitives. Functions
//! take already-resolved paths and return `ExplorerResult`; prompting and
//! printing live in the session.

pub mod attr_ops;
pub mod dir_read;
pub mod file_copy;
pub mod file_create;
pub mod path_ops;
pub mod search;

pub use attr_ops::{PermissionSet, PermissionTriplet};
pub use dir_read::DirEntryInfo;
pub use search::SearchReport;
