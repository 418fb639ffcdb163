//! `abort` subcommand (hidden): prints its arguments and exits with status 1
//! on the spot, without unwinding back to `main`. Handy for scripts that
//! need a failing step with a message.

use anyhow::Result;

use crate::context::Context;
use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    let handle = registry.define(
        "abort",
        "Print a message and exit with status 1",
        execute_abort,
    );
    registry[handle].hide();
}

/// Entry point for the abort subcommand. Never returns.
pub fn execute_abort(ctx: &Context<'_>) -> Result<()> {
    let args = ctx.args();
    let message = if args.is_empty() {
        "aborted".to_string()
    } else {
        args.join(" ")
    };
    tracing::debug!(%message, "aborting");
    crate::fatal_abort!("{message}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;

    #[test]
    fn registered_hidden_with_free_arguments() {
        let mut reg = Registry::new();
        register(&mut reg);
        let app = App::build(reg, "app", "", "1");
        app.command().debug_assert();
        let abort = app.find("abort").unwrap();
        assert!(abort.is_hidden());
        assert!(!app.command().render_help().to_string().contains("abort"));
    }
}
