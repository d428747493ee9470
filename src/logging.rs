use env_logger::{Builder, Env};

/// Used when RUST_LOG is not set.
pub const DEFAULT_FILTER: &str = "warn";

pub fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Installs the global logger, reading RUST_LOG.
pub fn init() {
    builder(Env::default()).init();
}
