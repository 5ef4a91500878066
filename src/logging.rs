//! Tracing subscriber setup for the command-line tool
//!
//! `RUST_LOG` wins when set. Otherwise the crate logs at `debug` with
//! `--verbose` and at `warn` without it. Output goes to stderr so it never
//! mixes with the board drawn on stdout.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "noughts=debug" } else { "warn" }
}

/// Install the global subscriber.
///
/// Returns `false` if another subscriber was already installed, which
/// happens when several tests initialize logging in one process.
pub fn init(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(verbose, "logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_picks_directive() {
        assert_eq!(default_directive(true), "noughts=debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn second_init_is_refused() {
        init(false);
        assert!(!init(false));
    }
}
