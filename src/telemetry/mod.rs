//! Logging configuration.
//!
//! Sets up env_logger with stderr output so diagnostics never mix with
//! search results on stdout. The level comes from `RUST_LOG`, defaulting
//! to `warn`.

use anyhow::Result;
use env_logger::Env;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger.
///
/// Safe to call more than once; only the first call configures the logger.
pub fn init() -> Result<()> {
    INIT.call_once(|| {
        env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
            .format_timestamp(None)
            .format_target(true)
            .format_module_path(false)
            .init();
    });

    Ok(())
}
