//! Utilities: logging setup driven by `-v`/`-q` and the `JET_LOG` environment
//! variable.
//!
//! Key items:
//!   init_logging / derive_level

/// Logging helpers.
pub mod logging {
    use tracing_subscriber::EnvFilter;

    /// Environment variable holding `EnvFilter` directives. Overrides `-v`/`-q`.
    pub const LOG_ENV: &str = "JET_LOG";

    #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
    pub enum LogLevel {
        Error = 0,
        Warn = 1,
        Info = 2,
        Debug = 3,
        Trace = 4,
    }

    impl LogLevel {
        pub fn as_str(&self) -> &'static str {
            match self {
                LogLevel::Error => "error",
                LogLevel::Warn => "warn",
                LogLevel::Info => "info",
                LogLevel::Debug => "debug",
                LogLevel::Trace => "trace",
            }
        }
    }

    pub fn derive_level(verbose: u8, quiet: bool) -> LogLevel {
        if quiet {
            return LogLevel::Error;
        }
        match verbose {
            0 => LogLevel::Warn,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }

    /// Build the filter: `JET_LOG` when set and valid, `level` otherwise.
    pub fn filter_for(level: LogLevel) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()))
    }

    /// Install the stderr subscriber. Later calls are no-ops, so an app can
    /// be run several times in one process.
    pub fn init_logging(level: LogLevel) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter_for(level))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

pub use logging::{derive_level, init_logging};

#[cfg(test)]
mod tests {
    use super::logging::*;

    #[test]
    fn level_from_flags() {
        assert_eq!(derive_level(0, false), LogLevel::Warn);
        assert_eq!(derive_level(1, false), LogLevel::Debug);
        assert_eq!(derive_level(5, false), LogLevel::Trace);
        assert_eq!(derive_level(3, true), LogLevel::Error);
    }

    #[test]
    fn level_ordering() {
        assert!(LogLevel::Error < LogLevel::Trace);
        assert_eq!(LogLevel::Info.as_str(), "info");
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(LogLevel::Warn);
        init_logging(LogLevel::Trace);
    }
}
