// Pagefix - one-shot patch utilities for the trimpro dashboard source tree

pub mod commands;
pub mod error;
pub mod patch;
pub mod text;
pub mod utils;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize the tracing subscriber.
///
/// Logs go to stderr so stdout stays reserved for the report lines the
/// patch commands print. `verbose` widens the default filter; RUST_LOG
/// overrides it either way.
pub fn init_with_logger(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose {
        "pagefix=debug"
    } else {
        "pagefix=info"
    };

    fmt::Subscriber::builder()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .without_time()
        .init();

    info!("Initializing pagefix v{}", version());

    Ok(())
}
