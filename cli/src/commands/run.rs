//! `sysprep run`: run named steps without the menu.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::execution::AuditedExecutor;
use crate::application::services::operations::Customizer;
use crate::domain::Operation;
use crate::output::TerminalReporter;

/// Arguments for the run command.
#[derive(Args)]
pub struct RunArgs {
    /// Steps to run, in order (see `sysprep steps`)
    #[arg(required = true, value_name = "STEP")]
    pub steps: Vec<Operation>,
}

/// Run `sysprep run`.
///
/// # Errors
///
/// Returns an error if the process is not root, the configuration cannot be
/// loaded, or a step fails. Steps after a failing one are not run.
pub async fn run(app: &AppContext, args: &RunArgs) -> Result<()> {
    let config = app.prepare().await?;
    let reporter = TerminalReporter::new(&app.output);
    let executor = AuditedExecutor::new(
        &app.runner,
        &app.audit,
        &app.clock,
        &reporter,
        app.settings.command_timeout,
    );
    let customizer = Customizer {
        exec: &executor,
        reporter: &reporter,
        fs: &app.fs,
        clock: &app.clock,
        config: &config,
        settings: &app.settings,
    };
    let outcomes = customizer.perform_all(&args.steps).await?;
    app.output
        .success(&format!("Completed {} step(s).", outcomes.len()));
    Ok(())
}
