//! Logging setup for the terminal front-end.
//!
//! `RUST_LOG` takes precedence. Without it the level is `warn`, or `debug`
//! when `CALC_LOG_VERBOSE` is set. Logs go to stderr so they never mix with
//! results on stdout.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_ENV: &str = "CALC_LOG_VERBOSE";

/// Default filter directive when `RUST_LOG` is unset
pub fn default_level() -> &'static str {
    if std::env::var_os(VERBOSE_ENV).is_some() {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the global subscriber. Safe to call once per process.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
