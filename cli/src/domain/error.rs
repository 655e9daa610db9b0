//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

// ── Startup errors ────────────────────────────────────────────────────────────

/// The process lacks the elevated privilege every operation needs.
#[derive(Debug, Error)]
pub enum PrivilegeError {
    #[error("This program must be run as root (current uid is {uid}).")]
    NotRoot { uid: u32 },

    #[error("Cannot determine the current user id: {0}")]
    Undetermined(String),
}

/// Errors loading the customization file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file {} not found.", path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot read configuration file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// ── Execution errors ──────────────────────────────────────────────────────────

/// An external command did not complete successfully.
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("{}", failure_message(.command, .code, .stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to spawn `{command}`: {reason}")]
    Spawn { command: String, reason: String },

    #[error("`{command}` timed out after {}s", .timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },

    #[error(transparent)]
    Audit(#[from] AuditLogError),
}

impl ExecutionError {
    /// Text recorded in the audit log for this failure.
    #[must_use]
    pub fn audit_output(&self) -> String {
        match self {
            Self::Failed { stderr, .. } => stderr.clone(),
            other => other.to_string(),
        }
    }
}

#[allow(clippy::ref_option)]
fn failure_message(command: &str, code: &Option<i32>, stderr: &str) -> String {
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    match *code {
        Some(code) => format!("`{command}` exited with status {code}"),
        None => format!("`{command}` was terminated by a signal"),
    }
}

/// The audit log could not be appended to.
#[derive(Debug, Error)]
pub enum AuditLogError {
    #[error("Cannot open audit log {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write audit log {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ── Command construction errors ───────────────────────────────────────────────

/// A configuration value was rejected while building a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandBuildError {
    #[error("Invalid package name '{0}': must match ^[a-z0-9][a-z0-9+.-]+$")]
    InvalidPackage(String),

    #[error("Invalid setting name '{0}'")]
    InvalidSetting(String),

    #[error("Setting '{0}' has an empty value")]
    EmptyValue(String),

    #[error("Unbalanced quotes in value for '{0}'")]
    UnbalancedQuotes(String),

    #[error("Argument contains a NUL byte: {0:?}")]
    NulByte(String),
}

// ── Menu errors ───────────────────────────────────────────────────────────────

/// An operation name did not match any known step.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown step '{0}'. Run 'sysprep steps' to list valid steps.")]
pub struct UnknownOperation(pub String);
