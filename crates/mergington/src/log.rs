//! Logging for the Mergington backend.
//!
//! Call sites use the re-exported `tracing` macros (`log::info!`, `log::warn!`, ...)
//! so they don't depend on `tracing` directly.

pub use tracing::{debug, error, info, trace, warn};

use tracing_subscriber::EnvFilter;

use crate::errors::LogError;

/// Filter used when `RUST_LOG` is unset: debug output for the backend's own
/// spans and for the per-request traces emitted by `tower_http`.
pub const DEFAULT_LOG_FILTER: &str = "tower_http=debug,mergington_backend=debug";

/// Resolves the log filter, preferring a `RUST_LOG` value when one is given.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install [`color_eyre`] error reports and a [`tracing_subscriber`] fmt subscriber.
///
/// - `RUST_LIB_BACKTRACE` is set to `1` unless already set, so startup
///   failures returned from `main` carry a backtrace.
/// - The subscriber filters with `RUST_LOG` when it parses, and with
///   [`DEFAULT_LOG_FILTER`] otherwise. An invalid `RUST_LOG` falls back to the
///   default instead of silencing the server.
///
/// Fails if either hook has already been installed in this process.
pub fn setup() -> Result<(), LogError> {
    if std::env::var("RUST_LIB_BACKTRACE").is_err() {
        unsafe { std::env::set_var("RUST_LIB_BACKTRACE", "1") }
    }
    color_eyre::install().map_err(LogError::ColorEyre)?;

    let rust_log = std::env::var("RUST_LOG").ok();
    tracing_subscriber::fmt::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .try_init()
        .map_err(LogError::TracingSubscriber)?;

    Ok(())
}
