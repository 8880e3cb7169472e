//! Logger setup built on tracing-subscriber.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter is taken from `RUST_LOG` when set; otherwise `default_level`
/// is applied to the given target name. Calling this more than once is a
/// no-op, so test fixtures can call it unconditionally.
///
/// # Arguments
///
/// * `name` - Target name the default directive applies to (e.g. a binary or test name)
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. "debug")
pub fn setup_logger(name: &str, default_level: &str) {
    let default_directive = format!("{}={}", name.replace('-', "_"), default_level);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
    {
        tracing::debug!(name, "logger initialized");
    }
}
