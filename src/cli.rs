//! Command line interface.
//!
//! Flags given on the command line take precedence over the configuration
//! file, which in turn overrides the built-in defaults.

use crate::config::{ExplorerConfig, ExplorerConfigBuilder};
use crate::errors::ExplorerResult;
use crate::{BUILD_INFO, VERSION};
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "fexplorer")]
#[command(version = VERSION)]
#[command(long_version = BUILD_INFO)]
#[command(about = "An interactive console file explorer")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "fexplorer.json")]
    pub config: PathBuf,

    /// Directory to start in instead of the working directory
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Replace emoji status indicators with plain text tags
    #[arg(long)]
    pub no_glyphs: bool,

    /// Write a default configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,
}

impl Cli {
    /// Default filter for the diagnostic logger
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Load the configuration file, or defaults when it is absent, then
    /// apply the command line overrides.
    pub fn load_config(&self) -> ExplorerResult<ExplorerConfig> {
        let file_config = ExplorerConfig::load_or_default(&self.config)?;

        let mut builder = ExplorerConfigBuilder::from_config(file_config);
        if let Some(dir) = &self.dir {
            builder = builder.start_dir(dir.clone());
        }
        if self.no_glyphs {
            builder = builder.glyphs(false);
        }

        builder.build()
    }
}

/// Write the default configuration to `path`
pub fn write_default_config(path: &Path) -> ExplorerResult<()> {
    ExplorerConfig::default().save_to_file(path)?;
    log::info!("Configuration saved to {}", path.display());
    Ok(())
}
