// src/system/logging.rs

use crate::constants::BASE_VERBOSITY;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::Write;

/// Logger settings, built once from the command line and handed to [`init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Most verbose level that is printed.
    pub level: LevelFilter,
}

impl LogConfig {
    /// Maps the `-v` count onto a level. With no flag only errors are shown;
    /// each `-v` adds a level up to debug. `quiet` silences everything.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let index = if quiet {
            0
        } else {
            BASE_VERBOSITY.saturating_add(verbose)
        };
        let level = match index {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        };
        Self { level }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from_verbosity(0, false)
    }
}

/// Installs the process logger. Output goes to stderr so stdout only carries
/// the filter expression. `RUST_LOG` still overrides individual targets.
pub fn init(config: &LogConfig) -> Result<(), log::SetLoggerError> {
    Builder::new()
        .filter_level(config.level)
        .parse_default_env()
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_errors_only() {
        assert_eq!(LogConfig::default().level, LevelFilter::Error);
    }

    #[test]
    fn test_each_flag_raises_the_level() {
        assert_eq!(LogConfig::from_verbosity(1, false).level, LevelFilter::Warn);
        assert_eq!(LogConfig::from_verbosity(2, false).level, LevelFilter::Info);
        assert_eq!(LogConfig::from_verbosity(3, false).level, LevelFilter::Debug);
    }

    #[test]
    fn test_level_is_capped_at_debug() {
        assert_eq!(LogConfig::from_verbosity(9, false).level, LevelFilter::Debug);
        assert_eq!(LogConfig::from_verbosity(u8::MAX, false).level, LevelFilter::Debug);
    }

    #[test]
    fn test_quiet_wins() {
        assert_eq!(LogConfig::from_verbosity(3, true).level, LevelFilter::Off);
    }
}
