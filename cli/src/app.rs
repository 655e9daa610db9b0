//! Application context: unified state passed to every command handler.
//!
//! `AppContext` owns the infrastructure for one run: the command runner, the
//! audit log, the clock and filesystem, plus the run-wide `Settings`. It is
//! constructed once in `Cli::run()`; nothing below it reads global paths.

use anyhow::Result;

use crate::application::services::startup;
use crate::domain::{CustomizationConfig, Settings};
use crate::infra::audit_log::FileAuditLog;
use crate::infra::clock::SystemClock;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::JsonConfigStore;
use crate::infra::fs::StdFs;
use crate::infra::privilege::IdPrivilegeProbe;
use crate::output::OutputContext;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Paths and limits for this run.
    pub settings: Settings,
    /// Executes command lines through `sh -c`.
    pub runner: TokioCommandRunner,
    /// Append-only audit trail at `settings.log_file`.
    pub audit: FileAuditLog,
    pub clock: SystemClock,
    pub fs: StdFs,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: &OutputFlags, settings: Settings) -> Self {
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            audit: FileAuditLog::new(&settings.log_file),
            runner: TokioCommandRunner::default(),
            clock: SystemClock,
            fs: StdFs,
            settings,
        }
    }

    /// Startup checks: require root, then load the customization file.
    ///
    /// # Errors
    ///
    /// Returns a `PrivilegeError` when not running as root, or a
    /// `ConfigError` when the configuration file cannot be loaded.
    pub async fn prepare(&self) -> Result<CustomizationConfig> {
        startup::ensure_root(&IdPrivilegeProbe::new(&self.runner)).await?;
        let config = startup::load_config(&JsonConfigStore::new(&self.settings.config_file))?;
        tracing::info!(
            config = %self.settings.config_file.display(),
            log_file = %self.settings.log_file.display(),
            "startup checks passed"
        );
        Ok(config)
    }
}
