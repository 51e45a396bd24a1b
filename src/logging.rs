//! Logging setup using `tracing` and `tracing-subscriber`
//!
//! Logs go to stderr so they never mix with game output on stdout.
//! `RUST_LOG` takes precedence over the verbosity flag.

use std::io::{self, IsTerminal};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Map a `-v` count to a log level
///
/// 0 = warn, 1 = info, 2 = debug, 3 or more = trace.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let default_level = level_for_verbosity(verbosity);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_lowercase()));

    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()?;

    Ok(())
}
