//! The interactive command loop.
//!
//! A `Session` owns the current directory and threads it through every
//! operation. Filesystem failures are reported on the console and never leave
//! an operation; only failures of the console streams themselves propagate
//! out of [`Session::run`].

use crate::config::ExplorerConfig;
use crate::core::console::{Console, Indicator};
use crate::core::logging::AuditLog;
use crate::errors::ExplorerResult;
use crate::fs_impl::{attr_ops, dir_read, file_copy, file_create, path_ops, search};
use crate::menu::{self, MENU_PROMPT, MenuChoice};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// What the loop does after handling one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W, E> {
    current: PathBuf,
    config: ExplorerConfig,
    console: Console<R, W, E>,
    audit: AuditLog,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Create a session starting in the configured directory, or the process
    /// working directory when none is configured.
    pub fn new(config: ExplorerConfig, input: R, out: W, err: E) -> ExplorerResult<Self> {
        let start = path_ops::initial_directory(config.start_dir.as_deref())?;
        Self::with_start_dir(config, start, input, out, err)
    }

    pub fn with_start_dir(
        config: ExplorerConfig,
        start: PathBuf,
        input: R,
        out: W,
        err: E,
    ) -> ExplorerResult<Self> {
        config.validate()?;
        let audit = AuditLog::new(&config.logging)?;
        let console = Console::new(input, out, err, &config.output);
        log::debug!("Session starting in {}", start.display());

        Ok(Self {
            current: start,
            config,
            console,
            audit,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(&mut self) -> ExplorerResult<()> {
        while self.step()? == Flow::Continue {}

        self.console.flush()?;
        if let Err(e) = self.audit.flush_all() {
            log::error!("Failed to flush audit log: {e}");
        }
        Ok(())
    }

    /// Print the menu, read one choice and handle it
    pub fn step(&mut self) -> ExplorerResult<Flow> {
        self.console.println("")?;
        for line in menu::render_menu() {
            self.console.println(&line)?;
        }

        let Some(input) = self.console.prompt(MENU_PROMPT)? else {
            log::debug!("End of input at menu prompt");
            return Ok(Flow::Exit);
        };

        if input.is_empty() {
            return Ok(Flow::Continue);
        }

        match MenuChoice::parse_line(&input) {
            Ok(choice) => self.dispatch(choice),
            Err(e) => {
                log::debug!("{e}");
                self.console.failure("Invalid choice.")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Run a single menu operation against the current directory
    pub fn dispatch(&mut self, choice: MenuChoice) -> ExplorerResult<Flow> {
        log::debug!("Dispatching {}", choice.operation());
        match choice {
            MenuChoice::List => self.list_files(),
            MenuChoice::ChangeDirectory => self.change_directory(),
            MenuChoice::Create => self.create_file(),
            MenuChoice::Delete => self.delete_file(),
            MenuChoice::Copy => self.copy_file(),
            MenuChoice::Move => self.move_file(),
            MenuChoice::Search => self.search_file(),
            MenuChoice::Permissions => self.file_permissions(),
            MenuChoice::Exit => {
                self.console
                    .indicated(Indicator::Farewell, "Exiting File Explorer...")?;
                Ok(Flow::Exit)
            }
        }
    }

    fn list_files(&mut self) -> ExplorerResult<Flow> {
        self.console.println("")?;
        self.console
            .println(&format!("Current directory: \"{}\"", self.current.display()))?;

        match dir_read::read_dir(&self.current) {
            Ok(entries) => {
                for entry in &entries {
                    self.console.println(&entry.render())?;
                }
                self.audit.record_success(
                    "list",
                    &self.current,
                    Some(format!("{} entries", entries.len())),
                );
            }
            Err(e) => {
                self.console
                    .eprintln(&format!("Error listing files: {}", e.message()))?;
                self.audit.record_failure("list", &self.current, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn change_directory(&mut self) -> ExplorerResult<Flow> {
        let Some(fragment) = self.console.prompt("Enter directory path: ")? else {
            return Ok(Flow::Exit);
        };

        match path_ops::change_directory(&mut self.current, &fragment) {
            Ok(new_path) => {
                let message = format!("Changed directory to: \"{}\"", new_path.display());
                self.console.indicated(Indicator::Directory, &message)?;
                self.audit.record_success("change_directory", &self.current, None);
            }
            Err(e) => {
                log::debug!("Change directory to {fragment:?} failed: {e}");
                self.console.failure("Invalid directory.")?;
                let target = path_ops::resolve(&self.current, &fragment);
                self.audit.record_failure("change_directory", &target, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn create_file(&mut self) -> ExplorerResult<Flow> {
        let Some(name) = self.console.prompt("Enter file name: ")? else {
            return Ok(Flow::Exit);
        };
        let path = path_ops::resolve(&self.current, &name);

        match file_create::create_file(&path) {
            Ok(()) => {
                self.console.success("File created successfully.")?;
                self.audit.record_success("create", &path, None);
            }
            Err(e) => {
                self.console
                    .failure(&format!("Error creating file: {}", e.message()))?;
                self.audit.record_failure("create", &path, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn delete_file(&mut self) -> ExplorerResult<Flow> {
        let Some(name) = self.console.prompt("Enter file name to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let path = path_ops::resolve(&self.current, &name);

        match file_create::remove_entry(&path) {
            Ok(true) => {
                self.console.success("File deleted successfully.")?;
                self.audit.record_success("delete", &path, None);
            }
            Ok(false) => {
                self.console.failure("File not found.")?;
                self.audit.record_not_found("delete", &path);
            }
            Err(e) => {
                self.console
                    .failure(&format!("Error deleting file: {}", e.message()))?;
                self.audit.record_failure("delete", &path, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn copy_file(&mut self) -> ExplorerResult<Flow> {
        let Some(source) = self.console.prompt("Enter source file name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(destination) = self.console.prompt("Enter destination file name: ")? else {
            return Ok(Flow::Exit);
        };
        let src = path_ops::resolve(&self.current, &source);
        let dst = path_ops::resolve(&self.current, &destination);

        match file_copy::copy_file(&src, &dst) {
            Ok(bytes) => {
                self.console.success("File copied successfully.")?;
                self.audit.record_success(
                    "copy",
                    &src,
                    Some(format!("{bytes} bytes to {}", dst.display())),
                );
            }
            Err(e) => {
                self.console
                    .failure(&format!("Error copying file: {}", e.message()))?;
                self.audit.record_failure("copy", &src, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn move_file(&mut self) -> ExplorerResult<Flow> {
        let Some(source) = self.console.prompt("Enter source file name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(destination) = self.console.prompt("Enter destination path: ")? else {
            return Ok(Flow::Exit);
        };
        // Both ends resolve against the current directory
        let src = path_ops::resolve(&self.current, &source);
        let dst = path_ops::resolve(&self.current, &destination);

        match file_copy::move_file(&src, &dst) {
            Ok(()) => {
                self.console.success("File moved successfully.")?;
                self.audit
                    .record_success("move", &src, Some(format!("to {}", dst.display())));
            }
            Err(e) => {
                self.console
                    .failure(&format!("Error moving file: {}", e.message()))?;
                self.audit.record_failure("move", &src, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn search_file(&mut self) -> ExplorerResult<Flow> {
        let Some(name) = self.console.prompt("Enter file name to search: ")? else {
            return Ok(Flow::Exit);
        };

        match search::search(&self.current, &name, &self.config.search) {
            Ok(report) if report.is_empty() => {
                self.console.not_found("File not found.")?;
                self.audit.record_not_found("search", &self.current);
            }
            Ok(report) => {
                for found in &report.matches {
                    self.console
                        .success(&format!("Found: \"{}\"", found.display()))?;
                }
                self.audit.record_success(
                    "search",
                    &self.current,
                    Some(format!("{} match(es) for {name:?}", report.matches.len())),
                );
            }
            Err(e) => {
                self.console
                    .failure(&format!("Error searching files: {}", e.message()))?;
                self.audit.record_failure("search", &self.current, &e);
            }
        }
        Ok(Flow::Continue)
    }

    fn file_permissions(&mut self) -> ExplorerResult<Flow> {
        let Some(name) = self.console.prompt("Enter file name: ")? else {
            return Ok(Flow::Exit);
        };
        let path = path_ops::resolve(&self.current, &name);

        match attr_ops::get_permissions(&path) {
            Ok(permissions) => {
                let bits = permissions
                    .map(|set| set.render(self.config.permissions.owner_only))
                    .unwrap_or_else(|| "not applicable".to_string());
                let display_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                self.console
                    .println(&format!("Permissions for \"{display_name}\": {bits}"))?;
                self.audit.record_success("permissions", &path, Some(bits));
            }
            Err(e) if e.is_not_found() => {
                self.console.failure("File not found.")?;
                self.audit.record_not_found("permissions", &path);
            }
            Err(e) => {
                self.console
                    .failure(&format!("Error reading permissions: {}", e.message()))?;
                self.audit.record_failure("permissions", &path, &e);
            }
        }
        Ok(Flow::Continue)
    }

    /// Tear the session down and return the console streams
    pub fn into_parts(self) -> (PathBuf, R, W, E) {
        let Self {
            current, console, ..
        } = self;
        let (input, out, err) = console.into_parts();
        (current, input, out, err)
    }
}
