//! Application object: a sorted snapshot of the registry plus top-level
//! metadata, turned into a `clap::Command` for parsing and dispatch.

use std::collections::HashSet;
use std::ffi::OsString;

use anyhow::{Context as _, Result, anyhow};
use clap::{Arg, ArgAction};

use crate::completion;
use crate::context::{ARGS_ID, Context};
use crate::registry::{CommandDef, Registry};
use crate::utils;

const VERBOSE_ID: &str = "verbose";
const QUIET_ID: &str = "quiet";
const BASH_COMPLETION_ID: &str = "generate-bash-completion";

/// A command-line application assembled from a [`Registry`].
#[derive(Debug)]
pub struct App {
    name: String,
    usage: String,
    version: String,
    commands: Vec<CommandDef>,
    bash_completion: bool,
}

impl App {
    /// Build the app from every command defined so far.
    ///
    /// Commands are sorted by name (byte-wise, stable for duplicates) so the
    /// help output lists them alphabetically.
    pub fn build(
        registry: Registry,
        name: impl Into<String>,
        usage: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let commands = registry.into_sorted();
        let app = Self {
            name: name.into(),
            usage: usage.into(),
            version: version.into(),
            commands,
            bash_completion: true,
        };
        tracing::debug!(
            app = %app.name,
            version = %app.version,
            commands = app.commands.len(),
            "built application"
        );
        app
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn bash_completion(&self) -> bool {
        self.bash_completion
    }

    pub fn set_bash_completion(&mut self, enabled: bool) -> &mut Self {
        self.bash_completion = enabled;
        self
    }

    /// Commands sorted by name.
    pub fn commands(&self) -> &[CommandDef] {
        &self.commands
    }

    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(CommandDef::name).collect()
    }

    /// The command `name` dispatches to: the earliest registered one when
    /// names collide.
    pub fn find(&self, name: &str) -> Option<&CommandDef> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Translate the app into a clap command tree.
    ///
    /// Only the first of several same-named commands reaches the parser, and
    /// aliases that clash with a name or an earlier alias are dropped.
    pub fn command(&self) -> clap::Command {
        let mut root = clap::Command::new(self.name.clone())
            .about(self.usage.clone())
            .version(self.version.clone())
            .propagate_version(true)
            .disable_help_subcommand(true)
            .arg(
                Arg::new(VERBOSE_ID)
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .global(true)
                    .help("Increase verbosity (-v, -vv)"),
            )
            .arg(
                Arg::new(QUIET_ID)
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue)
                    .global(true)
                    .help("Silence all non-error output"),
            );

        if self.bash_completion {
            root = root.arg(
                Arg::new(BASH_COMPLETION_ID)
                    .long(BASH_COMPLETION_ID)
                    .action(ArgAction::SetTrue)
                    .hide(true),
            );
        }

        for entry in self.exposed() {
            root = root.subcommand(subcommand(entry.cmd, &entry.aliases));
        }
        root
    }

    /// Commands as the parser sees them, in help order.
    ///
    /// Names win over aliases: the first command registered under a name is
    /// kept and later ones are skipped, then each alias is kept only if no
    /// command name or earlier alias already claims it.
    pub(crate) fn exposed(&self) -> Vec<Exposed<'_>> {
        let mut names = HashSet::new();
        let mut kept = Vec::with_capacity(self.commands.len());
        for cmd in &self.commands {
            if names.insert(cmd.name()) {
                kept.push(cmd);
            } else {
                tracing::warn!(
                    command = cmd.name(),
                    "duplicate command name; keeping the first"
                );
            }
        }

        let mut taken = names;
        kept.into_iter()
            .map(|cmd| {
                let aliases = cmd
                    .aliases()
                    .iter()
                    .map(String::as_str)
                    .filter(|alias| {
                        let free = taken.insert(*alias);
                        if !free {
                            tracing::warn!(
                                command = cmd.name(),
                                alias = *alias,
                                "alias already taken; dropping it"
                            );
                        }
                        free
                    })
                    .collect();
                Exposed { cmd, aliases }
            })
            .collect()
    }

    /// Parse the process arguments and run the selected command.
    pub fn run(&self) -> Result<()> {
        self.run_from(std::env::args_os())
    }

    /// Parse `argv` (program name first) and run the selected command.
    ///
    /// Without a sub-command the help text is printed. Parse failures,
    /// including `--help` and `--version`, come back as `clap::Error`.
    pub fn run_from<I, T>(&self, argv: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(argv)?;
        let verbose = matches.get_count(VERBOSE_ID);
        let quiet = matches.get_flag(QUIET_ID);
        utils::init_logging(utils::derive_level(verbose, quiet));

        if self.bash_completion && matches.get_flag(BASH_COMPLETION_ID) {
            let mut out = std::io::stdout().lock();
            return completion::write_candidates(self, &mut out)
                .context("failed to write completion candidates");
        }

        let Some((name, sub_matches)) = matches.subcommand() else {
            self.command()
                .print_help()
                .context("failed to print help")?;
            return Ok(());
        };

        let cmd = self
            .find(name)
            .ok_or_else(|| anyhow!("unknown command: {name}"))?;
        tracing::debug!(command = name, "dispatching");
        let ctx = Context::new(self, cmd.name(), sub_matches, verbose, quiet);
        cmd.invoke(&ctx)
    }
}

/// A command plus the aliases it keeps once clashes are resolved.
pub(crate) struct Exposed<'a> {
    pub(crate) cmd: &'a CommandDef,
    pub(crate) aliases: Vec<&'a str>,
}

fn subcommand(cmd: &CommandDef, aliases: &[&str]) -> clap::Command {
    let mut sub = clap::Command::new(cmd.name().to_owned())
        .about(cmd.usage_text().to_owned())
        .hide(cmd.is_hidden())
        .args(cmd.args().iter().cloned());
    for alias in aliases {
        sub = sub.visible_alias(alias.to_string());
    }
    if !cmd.has_positionals() {
        sub = sub.arg(
            Arg::new(ARGS_ID)
                .value_name("ARGS")
                .num_args(0..)
                .action(ArgAction::Append)
                .help("Arguments passed to the command"),
        );
    }
    sub
}
