//! Diagnostic logging setup using tracing.
//!
//! Logs go to stderr so command output on stdout stays machine readable.
//! The filter comes from `HAZARDWISE_LOG`, then `RUST_LOG`, then the `-v`
//! count.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn build_filter(verbose: u8) -> EnvFilter {
    if let Ok(directive) = std::env::var("HAZARDWISE_LOG") {
        if let Ok(filter) = EnvFilter::try_new(directive) {
            return filter;
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Initialize the tracing subscriber. Calling it twice is harmless.
pub fn init_logging(verbose: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_by_verbosity() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "debug");
    }

    #[test]
    fn test_init_logging_does_not_panic() {
        init_logging(0);
        init_logging(2);
    }
}
