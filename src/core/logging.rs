use crate::config::LogConfig;
use crate::errors::{ExplorerError, ExplorerResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn parse(level: &str) -> Self {
        match level.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// One line of the audit log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AuditEntry {
    pub timestamp: String,
    pub level: String,
    pub operation: String,
    pub path: String,
    pub result: String,
    pub details: Option<String>,
}

impl AuditEntry {
    pub fn new(
        level: LogLevel,
        operation: &str,
        path: &Path,
        result: &str,
        details: Option<String>,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            level: level.as_str().to_string(),
            operation: operation.to_string(),
            path: path.to_string_lossy().to_string(),
            result: result.to_string(),
            details,
        }
    }
}

/// Append-only JSON-lines record of explorer operations.
///
/// Entries are queued and written in batches; whatever is still queued is
/// flushed when the log is dropped. The file is rotated once it grows past
/// `max_size`, keeping `rotation_count` old generations (`audit.log.1`,
/// `audit.log.2`, ...).
pub struct AuditLog {
    config: LogConfig,
    threshold: LogLevel,
    writer: BufWriter<Box<dyn Write + Send>>,
    pending: VecDeque<AuditEntry>,
}

impl AuditLog {
    /// Open the audit log described by `config`.
    /// A disabled log accepts entries and discards them without any I/O.
    pub fn new(config: &LogConfig) -> ExplorerResult<Self> {
        config.validate()?;

        let writer: Box<dyn Write + Send> = if config.enabled {
            if let Some(parent) = Path::new(&config.file_path).parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&config.file_path)?;
            Box::new(file)
        } else {
            Box::new(std::io::sink())
        };

        Ok(Self {
            config: config.clone(),
            threshold: LogLevel::parse(&config.level),
            writer: BufWriter::new(writer),
            pending: VecDeque::with_capacity(config.batch_size),
        })
    }

    pub fn record_success(&mut self, operation: &str, path: &Path, details: Option<String>) {
        self.record(LogLevel::Info, operation, path, "success", details);
    }

    pub fn record_not_found(&mut self, operation: &str, path: &Path) {
        self.record(LogLevel::Info, operation, path, "not_found", None);
    }

    pub fn record_failure(&mut self, operation: &str, path: &Path, error: &ExplorerError) {
        self.record(
            LogLevel::Error,
            operation,
            path,
            "error",
            Some(error.message()),
        );
    }

    /// Queue an entry. Audit failures never abort the operation being
    /// audited, they are reported through the diagnostic log instead.
    pub fn record(
        &mut self,
        level: LogLevel,
        operation: &str,
        path: &Path,
        result: &str,
        details: Option<String>,
    ) {
        if !self.config.enabled || level > self.threshold {
            return;
        }

        self.pending
            .push_back(AuditEntry::new(level, operation, path, result, details));

        if self.pending.len() >= self.config.batch_size
            && let Err(e) = self.flush_all()
        {
            log::error!("Failed to write audit log: {e}");
        }
    }

    /// Number of entries queued but not yet written
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Write all queued entries and rotate the file if it grew too large
    pub fn flush_all(&mut self) -> ExplorerResult<()> {
        if !self.config.enabled || self.pending.is_empty() {
            return Ok(());
        }

        let entries: Vec<_> = self.pending.drain(..).collect();
        for entry in &entries {
            let json_line = serde_json::to_string(entry)
                .map_err(|e| ExplorerError::Serialization(e.to_string()))?;
            writeln!(self.writer, "{json_line}")?;
        }
        self.writer.flush()?;

        self.rotate_if_needed()
    }

    /// Check if the log file needs to be rotated
    pub fn rotate_if_needed(&mut self) -> ExplorerResult<()> {
        let metadata = fs::metadata(&self.config.file_path)?;
        if metadata.len() > self.config.max_size {
            self.rotate_log_file()?;
        }
        Ok(())
    }

    /// Shift `log.N` to `log.N+1`, dropping the oldest, then reopen a fresh file
    pub fn rotate_log_file(&mut self) -> ExplorerResult<()> {
        let base = &self.config.file_path;
        let generation = |i: u32| format!("{base}.{i}");

        for i in (1..=self.config.rotation_count).rev() {
            let old_file = generation(i);
            if Path::new(&old_file).exists() {
                if i == self.config.rotation_count {
                    fs::remove_file(&old_file)?;
                } else {
                    fs::rename(&old_file, generation(i + 1))?;
                }
            }
        }

        fs::rename(base, generation(1))?;

        let new_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(base)?;
        self.writer = BufWriter::new(Box::new(new_file) as Box<dyn Write + Send>);

        log::debug!("Rotated audit log {base}");
        Ok(())
    }
}

impl Drop for AuditLog {
    fn drop(&mut self) {
        if let Err(e) = self.flush_all() {
            log::error!("Failed to flush audit log on drop: {e}");
        }
    }
}
