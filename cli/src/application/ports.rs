//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::domain::{
    AuditLogError, AuditRecord, ConfigError, CustomizationConfig, ExecutionError, PrivilegeError,
};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run `command` through `sh -c`, capturing stdout and stderr.
    ///
    /// A non-zero exit is not an error at this level; it is reported in the
    /// returned `Output`. `timeout = None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError::Spawn`] if the shell cannot be started and
    /// [`ExecutionError::TimedOut`] if `timeout` elapses. On timeout the child
    /// process must be killed (not left orphaned).
    async fn run_shell(
        &self,
        command: &str,
        timeout: Option<Duration>,
    ) -> Result<Output, ExecutionError>;
}

// ── Audit Port ────────────────────────────────────────────────────────────────

/// Durable, append-only destination for audit records.
pub trait AuditSink {
    /// Append one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be opened or written.
    fn append(&self, record: &AuditRecord) -> Result<(), AuditLogError>;
}

/// Source of wall-clock time for audit timestamps and backup names.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

// ── Startup Ports ─────────────────────────────────────────────────────────────

/// Loads the customization file.
pub trait ConfigStore {
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, or malformed.
    fn load(&self) -> Result<CustomizationConfig, ConfigError>;
}

/// Reports the effective user id of this process.
#[allow(async_fn_in_trait)]
pub trait PrivilegeProbe {
    /// # Errors
    ///
    /// Returns [`PrivilegeError::Undetermined`] if the uid cannot be read.
    async fn effective_uid(&self) -> Result<u32, PrivilegeError>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Raw filesystem operations needed by the backup and script steps.
pub trait LocalFs {
    fn exists(&self, path: &Path) -> bool;
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Echo a command line about to run.
    fn command(&self, command: &str);
    /// Show captured command output.
    fn output(&self, text: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}
