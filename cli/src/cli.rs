//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::Settings;
use crate::domain::settings::{
    DEFAULT_BACKUP_DIR, DEFAULT_CONFIG_FILE, DEFAULT_LOG_FILE, DEFAULT_POST_INSTALL_SCRIPT,
};

/// Automate host customization: updates, GNOME, settings, network, backups
#[derive(Parser)]
#[command(name = "sysprep", version, propagate_version = true)]
pub struct Cli {
    /// Customization file (JSON)
    #[arg(long, global = true, env = "SYSPREP_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Audit log every executed command is appended to
    #[arg(long, global = true, env = "SYSPREP_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Directory receiving backup archives
    #[arg(long, global = true, default_value = DEFAULT_BACKUP_DIR)]
    pub backup_dir: PathBuf,

    /// Script run by the post-install step
    #[arg(long, global = true, default_value = DEFAULT_POST_INSTALL_SCRIPT)]
    pub post_install_script: PathBuf,

    /// Kill any command running longer than this (default: wait indefinitely)
    #[arg(long, global = true, value_name = "SECS")]
    pub command_timeout: Option<u64>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactive step menu (default)
    Menu,

    /// Run steps in order without the menu
    Run(commands::run::RunArgs),

    /// List step names
    Steps,

    /// Show version
    Version,
}

impl Cli {
    /// Run-wide settings derived from the flags.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings {
            config_file: self.config.clone(),
            log_file: self.log_file.clone(),
            backup_dir: self.backup_dir.clone(),
            post_install_script: self.post_install_script.clone(),
            command_timeout: self.command_timeout.map(Duration::from_secs),
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if startup checks fail or any step fails.
    pub async fn run(self) -> Result<()> {
        let settings = self.settings();
        let flags = OutputFlags {
            no_color: self.no_color,
            quiet: self.quiet,
        };
        match self.command.unwrap_or(Command::Menu) {
            Command::Version => {
                commands::version::run();
                Ok(())
            }
            Command::Steps => {
                let ctx = crate::output::OutputContext::new(flags.no_color, flags.quiet);
                commands::steps::run(&ctx);
                Ok(())
            }
            Command::Menu => {
                let app = AppContext::new(&flags, settings);
                commands::menu::run(&app).await
            }
            Command::Run(args) => {
                let app = AppContext::new(&flags, settings);
                commands::run::run(&app, &args).await
            }
        }
    }
}
