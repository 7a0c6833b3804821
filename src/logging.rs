//! Tracing subscriber setup
//!
//! Filtering follows `RUST_LOG` and defaults to `warn`, so the CLI output stays clean unless
//! more is asked for. Line-based commands log to stderr; the TUI owns the terminal, so its logs
//! are discarded.

use tracing_subscriber::{
    EnvFilter, fmt::writer::BoxMakeWriter, layer::SubscriberExt, util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "warn";

/// Where log lines are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    Discard,
}

impl LogTarget {
    /// Discard logs while a full-screen interface draws on the terminal
    #[must_use]
    pub const fn for_terminal(full_screen: bool) -> Self {
        if full_screen { Self::Discard } else { Self::Stderr }
    }

    fn writer(self) -> BoxMakeWriter {
        match self {
            Self::Stderr => BoxMakeWriter::new(std::io::stderr),
            Self::Discard => BoxMakeWriter::new(std::io::sink),
        }
    }
}

/// Install the global subscriber, as plain text or JSON lines
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(json: bool, target: LogTarget) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(target.writer()),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(target.writer()))
            .try_init()
    };

    if let Err(err) = result {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init_tracing(false, LogTarget::Discard);
        init_tracing(true, LogTarget::Stderr);
    }

    #[test]
    fn full_screen_discards_logs() {
        assert_eq!(LogTarget::for_terminal(true), LogTarget::Discard);
        assert_eq!(LogTarget::for_terminal(false), LogTarget::Stderr);
    }
}
