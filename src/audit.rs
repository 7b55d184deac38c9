//! Append-only audit trail of user commands and the responses shown for them.
//!
//! One event is one line:
//! `[YYYY-MM-DD HH:MM:SS] Command: <cmd> | Response: <resp>`.
//! Write failures are reported through `tracing` and never reach the caller.

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{debug, error};

use crate::error::{Result, SerenaError};

pub const DEFAULT_AUDIT_FILE: &str = "serena_audit_log.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub command: String,
    pub response: String,
}

impl AuditEntry {
    pub fn new(command: &str, response: &str) -> Self {
        Self {
            timestamp: Local::now(),
            command: command.to_string(),
            response: response.to_string(),
        }
    }

    pub fn to_line(&self) -> String {
        format!(
            "[{}] Command: {} | Response: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            single_line(&self.command),
            single_line(&self.response)
        )
    }
}

fn single_line(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Destination for audit events.
pub trait AuditSink {
    fn record_entry(&self, entry: AuditEntry);

    fn record(&self, command: &str, response: &str) {
        self.record_entry(AuditEntry::new(command, response));
    }
}

/// Audit file on disk, opened in append mode for every event.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file next to the running executable, or in the working directory
    /// when the executable location is unavailable.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(DEFAULT_AUDIT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_append(&self, entry: &AuditEntry) -> Result<()> {
        let to_error = |source| SerenaError::AuditWrite {
            path: self.path.display().to_string(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(to_error)?;
        file.write_all(entry.to_line().as_bytes()).map_err(to_error)?;
        Ok(())
    }
}

impl AuditSink for AuditLog {
    fn record_entry(&self, entry: AuditEntry) {
        match self.try_append(&entry) {
            Ok(()) => debug!(command = %entry.command, "Audit entry saved"),
            Err(e) => error!("Failed to save audit log: {}", e),
        }
    }
}

/// In-memory sink, used when no file should be touched.
#[derive(Debug, Default)]
pub struct MemoryAudit {
    entries: RefCell<Vec<AuditEntry>>,
}

impl MemoryAudit {
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries.borrow().clone()
    }
}

impl AuditSink for MemoryAudit {
    fn record_entry(&self, entry: AuditEntry) {
        self.entries.borrow_mut().push(entry);
    }
}

impl<S: AuditSink + ?Sized> AuditSink for std::rc::Rc<S> {
    fn record_entry(&self, entry: AuditEntry) {
        (**self).record_entry(entry)
    }
}
