//! `completion` subcommand: prints a completion script for the running app.
//!
//! Installation (bash):
//!   jet completion bash > ~/.local/share/bash-completion/completions/jet

use std::io::{self, Write};

use anyhow::{Context as _, Result};
use clap::Arg;
use clap_complete::Shell;

use crate::context::Context;
use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    let handle = registry.define(
        "completion",
        "Print a shell completion script",
        execute_completion,
    );
    registry[handle].arg(
        Arg::new("shell")
            .value_name("SHELL")
            .required(true)
            .value_parser(clap::value_parser!(Shell))
            .help("Target shell"),
    );
}

/// Entry point for the completion subcommand.
pub fn execute_completion(ctx: &Context<'_>) -> Result<()> {
    let shell = ctx
        .matches()
        .get_one::<Shell>("shell")
        .copied()
        .context("missing shell argument")?;
    let mut out = io::stdout().lock();
    crate::completion::generate(ctx.app(), shell, &mut out);
    out.flush().context("failed to flush completion script")
}
