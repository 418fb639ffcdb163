//! Shell completion.
//!
//! Two flavours: the bare candidate list printed for
//! `--generate-bash-completion` (one command name per line), and full
//! completion scripts produced by `clap_complete`.

use std::io::{self, Write};

use clap_complete::Shell;

use crate::app::App;

/// Write the visible command names and aliases, one per line, in help order.
///
/// Candidates are exactly what the parser accepts: duplicates and clashing
/// aliases are resolved first, then hidden commands are left out.
pub fn write_candidates(app: &App, out: &mut impl Write) -> io::Result<()> {
    for entry in app.exposed().iter().filter(|e| !e.cmd.is_hidden()) {
        writeln!(out, "{}", entry.cmd.name())?;
        for alias in &entry.aliases {
            writeln!(out, "{alias}")?;
        }
    }
    Ok(())
}

/// Write a completion script for `shell`.
pub fn generate(app: &App, shell: Shell, out: &mut dyn Write) {
    let mut cmd = app.command();
    tracing::debug!(%shell, app = app.name(), "generating completion script");
    clap_complete::generate(shell, &mut cmd, app.name().to_owned(), out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::registry::Registry;

    fn noop(_: &Context<'_>) -> anyhow::Result<()> {
        Ok(())
    }

    fn sample() -> App {
        let mut reg = Registry::new();
        reg.define("status", "show status", noop);
        let h = reg.define("build", "build it", noop);
        reg[h].alias("b");
        let h = reg.define("secret", "internal", noop);
        reg[h].hide();
        reg.define("status", "again", noop);
        App::build(reg, "demo", "demo app", "0.1.0")
    }

    #[test]
    fn candidates_sorted_without_hidden_or_duplicates() {
        let mut buf = Vec::new();
        write_candidates(&sample(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "build\nb\nstatus\n");
    }

    #[test]
    fn hidden_first_duplicate_hides_the_name() {
        let mut reg = Registry::new();
        let h = reg.define("dup", "hidden one", noop);
        reg[h].hide();
        reg.define("dup", "visible one", noop);
        reg.define("other", "", noop);
        let app = App::build(reg, "demo", "", "1");

        let mut buf = Vec::new();
        write_candidates(&app, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "other\n");

        let help = app.command().render_help().to_string();
        assert!(!help.contains("dup"));
    }

    #[test]
    fn bash_script_mentions_commands() {
        let mut buf = Vec::new();
        generate(&sample(), Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("demo"));
        assert!(script.contains("build"));
        assert!(script.contains("status"));
    }

    #[test]
    fn every_shell_generates() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
            let mut buf = Vec::new();
            generate(&sample(), shell, &mut buf);
            assert!(!buf.is_empty(), "{shell} produced nothing");
        }
    }
}
