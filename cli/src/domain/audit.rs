//! Command invocations, their results, and the audit records they leave.

use std::process::ExitStatus;

use chrono::NaiveDateTime;

/// `YYYY-MM-DD HH:MM:SS`, the prefix of every audit log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A command about to be executed. Created immediately before the child
/// process is spawned; consumed when its audit record is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    command: String,
    timestamp: NaiveDateTime,
}

impl CommandInvocation {
    #[must_use]
    pub fn new(command: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            command: command.into(),
            timestamp,
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Turn the invocation into its durable record.
    #[must_use]
    pub fn into_record(self, output: impl Into<String>) -> AuditRecord {
        AuditRecord {
            timestamp: self.timestamp,
            command: self.command,
            output: output.into(),
        }
    }
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    /// Non-zero exit; `None` when the process was killed by a signal.
    Failure(Option<i32>),
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            Self::Success
        } else {
            Self::Failure(status.code())
        }
    }
}

/// Captured outcome of one command, with both streams trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: ExitOutcome,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// Decode raw process output (lossy UTF-8, surrounding whitespace trimmed).
    #[must_use]
    pub fn from_output(output: &std::process::Output) -> Self {
        Self {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.status == ExitOutcome::Success
    }
}

/// One append-only entry of the audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditRecord {
    pub timestamp: NaiveDateTime,
    pub command: String,
    pub output: String,
}

impl AuditRecord {
    /// Two timestamped lines followed by a blank separator line.
    #[must_use]
    pub fn render(&self) -> String {
        let ts = self.timestamp.format(TIMESTAMP_FORMAT);
        format!(
            "{ts} - Command: {}\n{ts} - Output: {}\n\n",
            self.command, self.output
        )
    }
}
