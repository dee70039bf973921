//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize logging with a fallback filter used when `RUST_LOG` is unset
///
/// Safe to call more than once; later calls are ignored.
pub fn init_with_default(filter: &str) {
    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
