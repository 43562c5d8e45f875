//! Diagnostics go to stderr so they never mix with command output on stdout.

use tracing_subscriber::EnvFilter;

const QUIET: &str = "citydb_core=info,citydb_cli=info,warn";
const VERBOSE: &str = "citydb_core=debug,citydb_cli=debug,info";

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE
    } else {
        QUIET
    }
}

/// `RUST_LOG` when it is set and valid, otherwise [`default_directives`].
pub fn cli_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Installs the global subscriber: one compact line per event, no timestamps
/// or targets.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(cli_filter(verbose))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_switches_our_crates_to_debug() {
        assert!(default_directives(true).contains("citydb_core=debug"));
        assert!(default_directives(false).contains("citydb_core=info"));
    }

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(default_directives(verbose).parse::<EnvFilter>().is_ok());
        }
    }
}
