//! Application service: the host-customization steps.
//!
//! Each step builds its commands up front (so a bad configuration value
//! stops the step before anything runs), then executes them one at a time.
//! The first failing command aborts the step and is returned to the caller.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::{Clock, LocalFs, ProgressReporter};
use crate::application::services::execution::{ExecOptions, Execute};
use crate::domain::settings::backup_file_name;
use crate::domain::{CustomizationConfig, Operation, Settings, ShellCommand};

/// What a completed step did, for the caller's summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ran this many commands.
    Completed(usize),
    /// Backup archive written to this path.
    BackedUp(PathBuf),
    /// Nothing to do (e.g. no post-install script, no network settings).
    Skipped,
}

/// Everything a step needs, borrowed for the length of a run.
pub struct Customizer<'a, E, P, F, C> {
    pub exec: &'a E,
    pub reporter: &'a P,
    pub fs: &'a F,
    pub clock: &'a C,
    pub config: &'a CustomizationConfig,
    pub settings: &'a Settings,
}

impl<E, P, F, C> Customizer<'_, E, P, F, C>
where
    E: Execute,
    P: ProgressReporter,
    F: LocalFs,
    C: Clock,
{
    /// Run one step.
    ///
    /// # Errors
    ///
    /// Returns the first command failure, command-building error, or
    /// filesystem error of the step.
    pub async fn perform(&self, operation: Operation) -> Result<StepOutcome> {
        tracing::debug!(step = operation.name(), "starting step");
        match operation {
            Operation::UpdateSystem => {
                self.reporter.step("Updating system...");
                self.run_all(&[ShellCommand::apt_update_upgrade()]).await
            }
            Operation::InstallGnome => {
                self.reporter.step("Installing GNOME...");
                self.run_all(&[ShellCommand::install_gnome()]).await
            }
            Operation::SetGnomeDefault => {
                self.reporter.step("Setting GNOME as default...");
                self.run_all(&[ShellCommand::set_gnome_default_session()])
                    .await
            }
            Operation::InstallAdditionalSoftware => self.install_additional_software().await,
            Operation::ConfigureGnome => self.configure_gnome().await,
            Operation::ConfigureNetwork => self.configure_network().await,
            Operation::CreateBackup => self.create_backup().await,
            Operation::RunPostInstallScript => self.run_post_install_script().await,
            Operation::CleanUp => {
                self.reporter.step("Cleaning up...");
                self.run_all(&[ShellCommand::apt_cleanup()]).await
            }
            Operation::CheckSystemHealth => self.check_system_health().await,
        }
    }

    /// Run several steps in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails; later steps never run.
    pub async fn perform_all(&self, operations: &[Operation]) -> Result<Vec<StepOutcome>> {
        let mut outcomes = Vec::with_capacity(operations.len());
        for operation in operations {
            outcomes.push(self.perform(*operation).await?);
        }
        Ok(outcomes)
    }

    async fn run_all(&self, commands: &[ShellCommand]) -> Result<StepOutcome> {
        for command in commands {
            self.exec
                .execute(command, ExecOptions::with_progress())
                .await?;
        }
        Ok(StepOutcome::Completed(commands.len()))
    }

    async fn install_additional_software(&self) -> Result<StepOutcome> {
        self.reporter.step("Installing additional software...");
        let commands = self
            .config
            .additional_software
            .iter()
            .map(|package| ShellCommand::apt_install(&[package]))
            .collect::<Result<Vec<_>, _>>()?;
        self.run_all(&commands).await
    }

    async fn configure_gnome(&self) -> Result<StepOutcome> {
        self.reporter.step("Configuring GNOME...");
        let commands = self
            .config
            .gnome_settings()
            .map(|(setting, value)| ShellCommand::gsettings_set(setting, &value))
            .collect::<Result<Vec<_>, _>>()?;
        self.run_all(&commands).await
    }

    async fn configure_network(&self) -> Result<StepOutcome> {
        if self.config.network_config.is_empty() {
            return Ok(StepOutcome::Skipped);
        }
        self.reporter.step("Configuring network settings...");
        let commands = self
            .config
            .network_settings()
            .map(|(connection, args)| ShellCommand::nmcli_modify(connection, &args))
            .collect::<Result<Vec<_>, _>>()?;
        self.run_all(&commands).await
    }

    async fn create_backup(&self) -> Result<StepOutcome> {
        let dir = &self.settings.backup_dir;
        if !self.fs.exists(dir) {
            self.fs
                .create_dir_all(dir)
                .with_context(|| format!("cannot create backup directory {}", dir.display()))?;
        }
        self.reporter.step("Creating system backup...");
        let archive = dir.join(backup_file_name(self.clock.now()));
        let command = ShellCommand::backup_archive(&archive)?;
        self.exec
            .execute(&command, ExecOptions::unaudited())
            .await?;
        self.reporter
            .success(&format!("Backup written to {}", archive.display()));
        Ok(StepOutcome::BackedUp(archive))
    }

    async fn run_post_install_script(&self) -> Result<StepOutcome> {
        let script = &self.settings.post_install_script;
        if !self.fs.exists(script) {
            self.reporter.warn(&format!(
                "Post-install script {} not found.",
                script.display()
            ));
            return Ok(StepOutcome::Skipped);
        }
        self.reporter.step("Running post-install script...");
        self.run_all(&[ShellCommand::run_script(script)?]).await
    }

    async fn check_system_health(&self) -> Result<StepOutcome> {
        self.reporter.step("Checking system health...");
        let commands = ShellCommand::health_checks();
        for command in &commands {
            let result = self.exec.execute(command, ExecOptions::default()).await?;
            self.reporter.output(&result.stdout);
        }
        Ok(StepOutcome::Completed(commands.len()))
    }
}
