//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for PRJ_QUIET, PRJ_LOG_LEVEL, PRJ_LOG_JSON.
//! Output goes to stderr so stdout stays machine-readable.

use tracing_subscriber::{prelude::*, EnvFilter};

/// Initialize tracing. Call at process startup.
/// When PRJ_QUIET=1, only WARN and above are logged. RUST_LOG wins when set.
pub fn init_tracing() {
    let cfg = crate::config::ObservabilityConfig::from_env();
    let level = if cfg.quiet {
        "warn".to_string()
    } else {
        cfg.log_level.clone()
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
