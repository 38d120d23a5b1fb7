//! Tracing setup for the binary.

use crate::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `fmt` subscriber.
///
/// The filter comes from `REPORT_EXPORT_LOG` when set, otherwise
/// `report_export=info` (or `debug` with `verbose`). Calling this twice is
/// harmless; the second subscriber is ignored.
pub fn init_tracing(verbose: bool) {
    let filter = std::env::var(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            "report_export=debug".to_string()
        } else {
            "report_export=info".to_string()
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::new(filter))
        .try_init();
}
