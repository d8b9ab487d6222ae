// Rust guideline compliant 2026-10-19

//! Tracing setup for the CLI.

use pile_core::LogLevel;
use tracing::Level;

/// Resolves the effective log level: `-v` flags win over configuration.
///
/// One `-v` selects info, two select debug, three or more select trace.
#[must_use]
pub fn resolve_level(verbose: u8, configured: LogLevel) -> LogLevel {
    match verbose {
        0 => configured,
        1 => LogLevel::Info,
        2 => LogLevel::Debug,
        _ => LogLevel::Trace,
    }
}

fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

/// Installs a stderr fmt subscriber at the given level.
///
/// Stdout stays reserved for command output.
pub fn init_tracing(level: LogLevel) {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(to_tracing_level(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_flags_override_config() {
        assert_eq!(resolve_level(0, LogLevel::Error), LogLevel::Error);
        assert_eq!(resolve_level(1, LogLevel::Error), LogLevel::Info);
        assert_eq!(resolve_level(2, LogLevel::Warn), LogLevel::Debug);
        assert_eq!(resolve_level(7, LogLevel::Warn), LogLevel::Trace);
    }
}
