//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging for the console application.
///
/// `RUST_LOG` overrides the default `warn` level.
pub fn setup_logging() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
}
