//! Tracing subscriber setup.
//!
//! Logs go to stderr. `FACET_GALLERY_LOG` wins over `RUST_LOG`, which wins
//! over the `--verbose`/`--quiet` flags; the default level is `warn`.

use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

pub const LOG_ENV: &str = "FACET_GALLERY_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
	Quiet,
	Normal,
	Verbose,
}

impl Verbosity {
	#[must_use]
	pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
		if verbose {
			Self::Verbose
		} else if quiet {
			Self::Quiet
		} else {
			Self::Normal
		}
	}

	#[must_use]
	pub const fn default_level(self) -> Level {
		match self {
			Self::Quiet => Level::ERROR,
			Self::Normal => Level::WARN,
			Self::Verbose => Level::DEBUG,
		}
	}
}

/// Install the global subscriber. A second call is a no-op.
pub fn init(verbosity: Verbosity) {
	let fmt_layer = fmt::layer()
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(verbosity == Verbosity::Verbose)
		.without_time()
		.compact();

	// Err only when a subscriber is already installed.
	let _ = tracing_subscriber::registry()
		.with(build_env_filter(verbosity))
		.with(fmt_layer)
		.try_init();
}

fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
	if let Ok(directives) = std::env::var(LOG_ENV)
		&& let Ok(filter) = EnvFilter::try_new(&directives)
	{
		return filter;
	}
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}
	EnvFilter::new(verbosity.default_level().as_str())
}
