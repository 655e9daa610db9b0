//! `sysprep menu`: the interactive loop (default command).

use std::io::{BufRead, IsTerminal};

use anyhow::{Context, Result, bail};

use crate::app::AppContext;
use crate::application::ports::{Clock, LocalFs, ProgressReporter};
use crate::application::services::execution::{AuditedExecutor, Execute};
use crate::application::services::operations::Customizer;
use crate::domain::operation::{MenuChoice, parse_menu_choice};
use crate::output::{OutputContext, TerminalReporter};

/// Source of menu selections.
pub trait MenuInput {
    /// Read one line of user input.
    ///
    /// # Errors
    ///
    /// Returns an error if no input can be read (e.g. no TTY).
    fn read_choice(&mut self) -> Result<String>;
}

/// Reads selections from the terminal.
pub struct TerminalInput;

impl MenuInput for TerminalInput {
    fn read_choice(&mut self) -> Result<String> {
        let line = dialoguer::Input::<String>::new()
            .with_prompt("Select an option")
            .allow_empty(true)
            .interact_text()?;
        Ok(line)
    }
}

/// Reads selections one line at a time, for piped or redirected input.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> MenuInput for LineInput<R> {
    fn read_choice(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .context("failed to read menu selection")?;
        if read == 0 {
            bail!("input closed before a menu selection was made");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Run `sysprep menu`.
///
/// # Errors
///
/// Returns an error if the process is not root, the configuration cannot be
/// loaded, input cannot be read, or any step fails.
pub async fn run(app: &AppContext) -> Result<()> {
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
    if std::io::stdin().is_terminal() && console::Term::stderr().is_term() {
        menu_loop(&customizer, &app.output, &mut TerminalInput).await
    } else {
        let mut input = LineInput::new(std::io::stdin().lock());
        menu_loop(&customizer, &app.output, &mut input).await
    }
}

/// Show the menu and dispatch selections until the user exits.
///
/// The first failing step ends the loop with its error; nothing after it runs.
///
/// # Errors
///
/// Returns the first step or input error.
pub async fn menu_loop<E, P, F, C>(
    customizer: &Customizer<'_, E, P, F, C>,
    ctx: &OutputContext,
    input: &mut impl MenuInput,
) -> Result<()>
where
    E: Execute,
    P: ProgressReporter,
    F: LocalFs,
    C: Clock,
{
    loop {
        ctx.menu();
        let line = input.read_choice()?;
        match parse_menu_choice(&line) {
            Some(MenuChoice::Run(operation)) => {
                customizer.perform(operation).await?;
            }
            Some(MenuChoice::Exit) => {
                ctx.info("Exiting...");
                break;
            }
            None => ctx.warn("Invalid choice. Please select a valid option."),
        }
    }
    ctx.success("Customization complete. Please restart your system to apply changes.");
    Ok(())
}
