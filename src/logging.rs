//! Structured logging for the `dcos` binary.
//!
//! Events go to stderr. The filter is read from `DCOS_LOG_LEVEL` using
//! `EnvFilter` syntax and defaults to `warn`, so a successful invocation
//! leaves stderr empty.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_LEVEL_ENV: &str = "DCOS_LOG_LEVEL";

const DEFAULT_FILTER: &str = "warn";

/// Build the filter from the environment, falling back to `warn`.
pub fn env_filter() -> EnvFilter {
	EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter())
		.with_writer(std::io::stderr)
		.with_ansi(false)
		.without_time()
		.with_target(false)
		.try_init();
}
