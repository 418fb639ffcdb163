//! Fatal errors.
//!
//! A fatal error is a message for the user followed by exit status 1. Actions
//! raise one with [`fatalf!`](crate::fatalf), which returns early with a
//! [`Fatal`] error; it travels up with `?` like any other error and the
//! process only ends in `main`, through [`exit_with`]. [`abort`] is the
//! immediate form for code that has no error path to return through.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

/// Exit status used for fatal errors.
pub const EXIT_CODE: i32 = 1;

/// User-facing unrecoverable error.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("{message}")]
pub struct Fatal {
    message: String,
}

impl Fatal {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Build a [`Fatal`] from format arguments.
#[macro_export]
macro_rules! fatal {
    ($($t:tt)*) => { $crate::fatal::Fatal::new(format!($($t)*)) };
}

/// Return early with a [`Fatal`] error built from format arguments.
#[macro_export]
macro_rules! fatalf {
    ($($t:tt)*) => { return Err($crate::fatal!($($t)*).into()) };
}

/// Print a message and exit with status 1 right away.
#[macro_export]
macro_rules! fatal_abort {
    ($($t:tt)*) => { $crate::fatal::abort(format_args!($($t)*)) };
}

/// Write `args` plus a newline to stdout and exit with [`EXIT_CODE`].
pub fn abort(args: fmt::Arguments<'_>) -> ! {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{args}");
    let _ = out.flush();
    std::process::exit(EXIT_CODE)
}

/// Render `err` the way the entry point reports it and return the exit code.
///
/// - [`Fatal`]: message and newline on `out`, code 1.
/// - `clap::Error`: clap's rendering on whichever stream clap picks, clap's
///   exit code (0 for `--help`/`--version`, 2 for usage errors).
/// - anything else: `Error: ...` with the full context chain on `err_out`,
///   code 1.
pub fn report(err: &anyhow::Error, out: &mut impl Write, err_out: &mut impl Write) -> i32 {
    if let Some(fatal) = err.downcast_ref::<Fatal>() {
        let _ = writeln!(out, "{}", fatal.message());
        return EXIT_CODE;
    }
    if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
        let rendered = clap_err.render().to_string();
        let stream: &mut dyn Write = if clap_err.use_stderr() { err_out } else { out };
        let _ = write!(stream, "{rendered}");
        return clap_err.exit_code();
    }
    let _ = writeln!(err_out, "Error: {err:#}");
    EXIT_CODE
}

/// Report `err` on the standard streams and terminate the process.
pub fn exit_with(err: anyhow::Error) -> ! {
    if let Some(clap_err) = err.downcast_ref::<clap::Error>() {
        clap_err.exit()
    }
    tracing::debug!(error = %err, "exiting on error");
    let code = {
        let mut out = io::stdout().lock();
        let mut err_out = io::stderr().lock();
        let code = report(&err, &mut out, &mut err_out);
        let _ = out.flush();
        let _ = err_out.flush();
        code
    };
    std::process::exit(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};

    fn fails(x: i32) -> Result<()> {
        if x > 0 {
            crate::fatalf!("x={}", x);
        }
        Ok(())
    }

    fn report_to_strings(err: &anyhow::Error) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err_out = Vec::new();
        let code = report(err, &mut out, &mut err_out);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err_out).unwrap(),
        )
    }

    #[test]
    fn fatalf_returns_fatal_error() {
        assert!(fails(0).is_ok());
        let err = fails(5).unwrap_err();
        let fatal = err.downcast_ref::<Fatal>().expect("fatal error");
        assert_eq!(fatal.message(), "x=5");
    }

    #[test]
    fn report_fatal_writes_stdout_only() {
        let err = fails(5).unwrap_err();
        let (code, out, err_out) = report_to_strings(&err);
        assert_eq!(code, 1);
        assert_eq!(out, "x=5\n");
        assert!(err_out.is_empty());
    }

    #[test]
    fn report_sees_through_context() {
        let err = fails(7).context("while running").unwrap_err();
        let (code, out, _) = report_to_strings(&err);
        assert_eq!(code, 1);
        assert_eq!(out, "x=7\n");
    }

    #[test]
    fn report_other_error_goes_to_stderr() {
        let err = anyhow::anyhow!("boom").context("outer");
        let (code, out, err_out) = report_to_strings(&err);
        assert_eq!(code, 1);
        assert!(out.is_empty());
        assert_eq!(err_out, "Error: outer: boom\n");
    }

    #[test]
    fn report_clap_usage_error() {
        let clap_err = clap::Command::new("t")
            .try_get_matches_from(["t", "--nope"])
            .unwrap_err();
        let (code, out, err_out) = report_to_strings(&clap_err.into());
        assert_eq!(code, 2);
        assert!(out.is_empty());
        assert!(err_out.contains("--nope"));
    }

    #[test]
    fn fatal_macro_builds_value() {
        let f = crate::fatal!("{}-{}", "a", 1);
        assert_eq!(f, Fatal::new("a-1"));
        assert_eq!(f.to_string(), "a-1");
    }
}
