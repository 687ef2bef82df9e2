//! Stderr logging setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "yahoo_ffl=debug,warn"
    } else {
        "warn"
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the verbosity flag.
///
/// Calling this twice is harmless; the second subscriber is ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("yahoo_ffl=debug"));
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(false);
        init_logging(true);
    }
}
