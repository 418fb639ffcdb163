//! Invocation context handed to every action.

use clap::ArgMatches;

use crate::app::App;

/// Id of the catch-all positional list given to commands without positionals.
pub(crate) const ARGS_ID: &str = "args";

/// What an action gets to see: the parsed matches of its own sub-command,
/// global verbosity and the app it belongs to.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    app: &'a App,
    command: &'a str,
    matches: &'a ArgMatches,
    verbose: u8,
    quiet: bool,
}

impl<'a> Context<'a> {
    pub(crate) fn new(
        app: &'a App,
        command: &'a str,
        matches: &'a ArgMatches,
        verbose: u8,
        quiet: bool,
    ) -> Self {
        Self {
            app,
            command,
            matches,
            verbose,
            quiet,
        }
    }

    pub fn app(&self) -> &'a App {
        self.app
    }

    /// Name of the selected sub-command (canonical, never an alias).
    pub fn command_name(&self) -> &'a str {
        self.command
    }

    /// Raw clap matches for the selected sub-command.
    pub fn matches(&self) -> &'a ArgMatches {
        self.matches
    }

    /// Free-form positional arguments. Empty for commands that declare
    /// their own positionals.
    pub fn args(&self) -> Vec<&'a str> {
        match self.matches.try_get_many::<String>(ARGS_ID) {
            Ok(Some(vals)) => vals.map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Positional argument `n` from [`Context::args`].
    pub fn arg(&self, n: usize) -> Option<&'a str> {
        self.args().get(n).copied()
    }

    /// Value of a string option or positional declared on the command.
    pub fn value(&self, id: &str) -> Option<&'a str> {
        self.matches
            .try_get_one::<String>(id)
            .ok()
            .flatten()
            .map(String::as_str)
    }

    /// Whether a `SetTrue` flag declared on the command was given.
    pub fn flag(&self, id: &str) -> bool {
        self.matches
            .try_get_one::<bool>(id)
            .ok()
            .flatten()
            .copied()
            .unwrap_or(false)
    }

    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
