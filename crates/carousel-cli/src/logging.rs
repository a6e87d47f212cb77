use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "info,carousel_core=debug,carousel_cli=debug"
    } else {
        "info"
    }
}

/// Initialize console logging on stderr.
///
/// `RUST_LOG` takes precedence over `--verbose`. Stdout is left untouched so
/// `--stdout` output stays valid JSON.
pub fn init_logging(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
