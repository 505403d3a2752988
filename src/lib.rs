//! fexplorer - Console File Explorer
//!
//! An interactive text menu over basic filesystem operations, scoped to a
//! single working directory held in memory for the length of a session.
//!
//! ## Features
//!
//! - **Navigation**: list the current directory and change into others
//! - **File management**: create, delete, copy and move single files
//! - **Search**: recursive lookup by exact file name
//! - **Permissions**: `ls`-style `rwx` rendering of mode bits
//! - **Audit trail**: optional JSON-lines log of every operation
//!
//! ## Architecture
//!
//! - `cli`: Command line flags layered over the configuration file
//! - `config`: Configuration loading, validation and the builder
//! - `core`: Console I/O and the audit log
//! - `fs_impl`: Filesystem operations behind each menu item
//! - `menu`: Menu rendering and choice parsing
//! - `session`: The command loop that owns the current directory
//! - `errors`: Error type shared by everything above
//!
//! ## Usage
//!
//! ```rust
//! use fexplorer::{ExplorerConfig, Session};
//! use std::io::Cursor;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let input = Cursor::new(b"1\n9\n".to_vec());
//! let mut session = Session::with_start_dir(
//!     ExplorerConfig::default(),
//!     dir.path().to_path_buf(),
//!     input,
//!     Vec::new(),
//!     Vec::new(),
//! )
//! .unwrap();
//! session.run().unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod fs_impl;
pub mod menu;
pub mod session;

#[cfg(test)]
mod error_tests;

// Re-export main types for convenience
pub use config::{
    ExplorerConfig, ExplorerConfigBuilder, LogConfig, OutputConfig, PermissionsConfig,
    SearchConfig,
};
pub use crate::core::console::{Console, Indicator};
pub use crate::core::logging::{AuditEntry, AuditLog};
pub use errors::{ExplorerError, ExplorerResult};
pub use menu::MenuChoice;
pub use session::{Flow, Session};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information
pub const BUILD_INFO: &str = concat!(
    "version=",
    env!("CARGO_PKG_VERSION"),
    " build_time=",
    env!("FEXPLORER_BUILD_TIMESTAMP"),
    " git_sha=",
    env!("FEXPLORER_GIT_SHA"),
    " rustc=",
    env!("FEXPLORER_RUSTC_VERSION")
);

/// Initialize diagnostic logging. `RUST_LOG` overrides `default_level`.
pub fn init(default_level: &str) -> ExplorerResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init()
        .map_err(|e| ExplorerError::Log(format!("Failed to initialize logger: {e}")))?;
    log::debug!("fexplorer v{VERSION} initialized");
    Ok(())
}
