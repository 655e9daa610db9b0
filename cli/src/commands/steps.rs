//! `sysprep steps`: list the step names accepted by `sysprep run`.

use owo_colors::OwoColorize as _;

use crate::domain::Operation;
use crate::output::OutputContext;

/// Run `sysprep steps`. Needs neither root nor a configuration file.
pub fn run(ctx: &OutputContext) {
    for op in Operation::ALL {
        println!(
            "  {:<20} {}",
            op.name().style(ctx.styles.header),
            op.label()
        );
    }
}
