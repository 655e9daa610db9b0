//! Application service: run one command and leave an audit record.
//!
//! Every invocation that reaches [`AuditedExecutor::execute`] writes exactly
//! one audit record (success or failure) unless the caller passes
//! [`ExecOptions::unaudited`].

use std::time::Duration;

use crate::application::ports::{AuditSink, Clock, CommandRunner, ProgressReporter};
use crate::domain::{CommandInvocation, CommandResult, ExecutionError, ShellCommand};

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Append an audit record for this invocation.
    pub log: bool,
    /// Echo the command line before running it.
    pub show_progress: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            log: true,
            show_progress: false,
        }
    }
}

impl ExecOptions {
    /// Audited, with the command line echoed.
    #[must_use]
    pub fn with_progress() -> Self {
        Self {
            log: true,
            show_progress: true,
        }
    }

    /// Not audited; used for the backup archive.
    #[must_use]
    pub fn unaudited() -> Self {
        Self {
            log: false,
            show_progress: false,
        }
    }
}

/// Executes commands on behalf of the operation services.
#[allow(async_fn_in_trait)]
pub trait Execute {
    /// Run `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns an [`ExecutionError`] when the command exits non-zero, cannot
    /// be spawned, times out, or its audit record cannot be written.
    async fn execute(
        &self,
        command: &ShellCommand,
        options: ExecOptions,
    ) -> Result<CommandResult, ExecutionError>;
}

/// Production [`Execute`]: a [`CommandRunner`] wrapped with audit logging.
pub struct AuditedExecutor<'a, R, A, C, P> {
    runner: &'a R,
    audit: &'a A,
    clock: &'a C,
    reporter: &'a P,
    timeout: Option<Duration>,
}

impl<'a, R, A, C, P> AuditedExecutor<'a, R, A, C, P>
where
    R: CommandRunner,
    A: AuditSink,
    C: Clock,
    P: ProgressReporter,
{
    #[must_use]
    pub fn new(
        runner: &'a R,
        audit: &'a A,
        clock: &'a C,
        reporter: &'a P,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            runner,
            audit,
            clock,
            reporter,
            timeout,
        }
    }

    /// Audit a failed invocation, then hand back the command's own error.
    ///
    /// If the audit write fails too, the command failure still wins; the
    /// audit problem is only traced.
    fn fail(
        &self,
        invocation: CommandInvocation,
        err: ExecutionError,
        options: ExecOptions,
    ) -> ExecutionError {
        tracing::info!(command = invocation.command(), error = %err, audited = options.log, "command failed");
        if options.log {
            let record = invocation.into_record(err.audit_output());
            if let Err(audit_err) = self.audit.append(&record) {
                tracing::warn!(error = %audit_err, "audit record for failed command was not written");
            }
        }
        err
    }
}

impl<R, A, C, P> Execute for AuditedExecutor<'_, R, A, C, P>
where
    R: CommandRunner,
    A: AuditSink,
    C: Clock,
    P: ProgressReporter,
{
    async fn execute(
        &self,
        command: &ShellCommand,
        options: ExecOptions,
    ) -> Result<CommandResult, ExecutionError> {
        let invocation = CommandInvocation::new(command.as_str(), self.clock.now());
        if options.show_progress {
            self.reporter.command(invocation.command());
        }

        let output = match self.runner.run_shell(invocation.command(), self.timeout).await {
            Ok(output) => output,
            Err(err) => return Err(self.fail(invocation, err, options)),
        };

        let result = CommandResult::from_output(&output);
        if !result.success() {
            let code = output.status.code();
            let err = ExecutionError::Failed {
                command: invocation.command().to_string(),
                code,
                stderr: result.stderr,
            };
            return Err(self.fail(invocation, err, options));
        }

        tracing::info!(command = invocation.command(), exit_code = 0, audited = options.log, "command succeeded");
        if options.log {
            self.audit
                .append(&invocation.into_record(result.stdout.clone()))?;
        }
        Ok(result)
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
