//! Structured logging bootstrap using `tracing`.

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset: service and request logs at info.
pub const DEFAULT_DIRECTIVES: &str = "info,inflation_forecast=info,tower_http=info";

/// Build the filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVES`].
pub fn env_filter() -> Result<EnvFilter> {
    Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVES))?)
}

/// Install the global subscriber; later calls are no-ops.
///
/// Output goes to stderr so the `historical` and `forecast` subcommands can
/// print JSON on stdout.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_target(true)
        .with_filter(env_filter()?);

    tracing_subscriber::registry().with(fmt_layer).try_init()?;
    tracing::debug!(directives = DEFAULT_DIRECTIVES, "tracing initialised");
    Ok(())
}
