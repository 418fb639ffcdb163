/*!
`commands.rs`

Implements the `commands` subcommand: lists the commands of the running app
in help order, the way the parser sees them: hidden commands, later
duplicates and clashing aliases are left out.

JSON Output Shape:
{
  "app": "jet",
  "version": "0.1.0",
  "count": 3,
  "commands": [
    { "name": "commands", "usage": "...", "aliases": ["ls"] }
  ]
}
*/

use anyhow::{Context as _, Result};
use clap::Arg;
use serde::Serialize;

use crate::app::App;
use crate::cmd::format::{Role, StyleOptions, TableOpts, color, table};
use crate::context::Context;
use crate::registry::Registry;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Aligned NAME / USAGE table
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Debug, Serialize)]
struct CommandListing<'a> {
    app: &'a str,
    version: &'a str,
    count: usize,
    commands: Vec<CommandEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct CommandEntry<'a> {
    name: &'a str,
    usage: &'a str,
    aliases: Vec<&'a str>,
}

pub fn register(registry: &mut Registry) {
    let handle = registry.define("commands", "List the available commands", execute_commands);
    registry[handle].alias("ls").arg(
        Arg::new("format")
            .long("format")
            .value_name("FORMAT")
            .value_parser(clap::value_parser!(OutputFormat))
            .default_value("text")
            .help("Output format"),
    );
}

/// Entry point for the commands subcommand.
pub fn execute_commands(ctx: &Context<'_>) -> Result<()> {
    let format = ctx
        .matches()
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();
    let rendered = render(ctx.app(), format, &StyleOptions::detect())?;
    println!("{rendered}");
    Ok(())
}

fn listing(app: &App) -> CommandListing<'_> {
    let commands: Vec<CommandEntry<'_>> = app
        .exposed()
        .into_iter()
        .filter(|e| !e.cmd.is_hidden())
        .map(|e| CommandEntry {
            name: e.cmd.name(),
            usage: e.cmd.usage_text(),
            aliases: e.aliases,
        })
        .collect();
    CommandListing {
        app: app.name(),
        version: app.version(),
        count: commands.len(),
        commands,
    }
}

fn render(app: &App, format: OutputFormat, style: &StyleOptions) -> Result<String> {
    let listing = listing(app);
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&listing).context("failed to serialize command listing")
        }
        OutputFormat::Text => {
            let rows: Vec<Vec<String>> = listing
                .commands
                .iter()
                .map(|c| {
                    let name = if c.aliases.is_empty() {
                        c.name.to_string()
                    } else {
                        format!("{} ({})", c.name, c.aliases.join(", "))
                    };
                    vec![color(Role::Primary, name, style), c.usage.to_string()]
                })
                .collect();
            Ok(table(&["NAME", "USAGE"], &rows, TableOpts::default(), style))
        }
    }
}
