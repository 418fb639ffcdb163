use jet::{App, Registry, cmd, fatal};

/// Jet - sub-command registry demo
///
/// Built-in commands (listed alphabetically in `jet --help`):
///   jet commands [--format text|json]   List the available commands (alias: ls)
///   jet completion <SHELL>              Print a shell completion script
///   jet env <NAME>                      Print an environment variable (exit 1 if unset)
///
/// Global flags / env:
///   -v / -vv        Increase verbosity
///   -q / --quiet    Errors only
///   JET_LOG         tracing filter directives, overrides -v / -q
///   NO_COLOR        Plain text output
fn main() {
    let mut registry = Registry::new();
    cmd::register_builtins(&mut registry);

    let app = App::build(
        registry,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    if let Err(err) = app.run() {
        fatal::exit_with(err);
    }
}
