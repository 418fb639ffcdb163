//! `env` subcommand: prints one environment variable. An unset variable is a
//! fatal error (message on stdout, exit status 1).

use std::env::VarError;

use anyhow::Result;
use clap::Arg;

use crate::context::Context;
use crate::fatal::Fatal;
use crate::registry::Registry;

pub fn register(registry: &mut Registry) {
    let handle = registry.define(
        "env",
        "Print the value of an environment variable",
        execute_env,
    );
    registry[handle].arg(
        Arg::new("name")
            .value_name("NAME")
            .required(true)
            .help("Variable name"),
    );
}

/// Entry point for the env subcommand.
pub fn execute_env(ctx: &Context<'_>) -> Result<()> {
    let Some(name) = ctx.value("name") else {
        crate::fatalf!("missing variable name");
    };
    let value = lookup(name)?;
    println!("{value}");
    Ok(())
}

fn lookup(name: &str) -> Result<String, Fatal> {
    match std::env::var(name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => crate::fatalf!("environment variable {name} is not set"),
        Err(VarError::NotUnicode(_)) => {
            crate::fatalf!("environment variable {name} is not valid unicode")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_existing_variable() {
        // PATH is set in any sane test environment.
        assert!(lookup("PATH").is_ok());
    }

    #[test]
    fn lookup_missing_variable_is_fatal() {
        let err = lookup("JET_TEST_SURELY_UNSET_VARIABLE").unwrap_err();
        assert_eq!(
            err.message(),
            "environment variable JET_TEST_SURELY_UNSET_VARIABLE is not set"
        );
    }
}
