//! `TerminalReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so application services can emit progress events without depending on
//! any presentation type directly.

use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints the step header, e.g. `"Updating system..."`
/// - `command()` prints `"Running: {command}"`
/// - `output()` prints captured output indented
///
/// Everything is suppressed when `ctx.quiet`.
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("{}", message.style(self.ctx.styles.header));
        }
    }

    fn command(&self, command: &str) {
        if !self.ctx.quiet {
            println!("{}", format!("Running: {command}").style(self.ctx.styles.dim));
        }
    }

    fn output(&self, text: &str) {
        if self.ctx.quiet || text.is_empty() {
            return;
        }
        for line in text.lines() {
            println!("    {line}");
        }
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }
}
