//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparsable.
const DEFAULT_DIRECTIVE: &str = "warn";

/// Build the filter from `RUST_LOG`, defaulting to `warn`.
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber, writing to stderr.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    fn enabled_under_filter(level: Level) -> bool {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::sink)
            .with_env_filter(env_filter())
            .finish();
        tracing::subscriber::with_default(subscriber, || match level {
            Level::TRACE => tracing::enabled!(Level::TRACE),
            Level::DEBUG => tracing::enabled!(Level::DEBUG),
            Level::INFO => tracing::enabled!(Level::INFO),
            Level::WARN => tracing::enabled!(Level::WARN),
            Level::ERROR => tracing::enabled!(Level::ERROR),
        })
    }

    // Single test so the RUST_LOG mutations never race each other.
    #[test]
    fn rust_log_controls_level() {
        std::env::remove_var("RUST_LOG");
        assert!(enabled_under_filter(Level::WARN));
        assert!(!enabled_under_filter(Level::INFO));

        std::env::set_var("RUST_LOG", "debug");
        assert!(enabled_under_filter(Level::DEBUG));
        assert!(!enabled_under_filter(Level::TRACE));

        std::env::set_var("RUST_LOG", "trace");
        assert!(enabled_under_filter(Level::TRACE));

        std::env::remove_var("RUST_LOG");
    }
}
