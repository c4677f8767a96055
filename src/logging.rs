//! Logging setup
//!
//! Tracing-based logging to stderr. The log level is controlled via the
//! `SHOEBOX_LOG` environment variable:
//! - `SHOEBOX_LOG=debug` for verbose output
//! - `SHOEBOX_LOG=info` for standard output (default)
//! - `SHOEBOX_LOG=warn` for warnings and errors only

use tracing_subscriber::EnvFilter;

/// Initialize the logging system; call once at startup
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env("SHOEBOX_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
