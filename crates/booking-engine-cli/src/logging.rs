use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset. `-q` beats `-v`.
pub fn default_level(verbose: u8, quiet: u8) -> LevelFilter {
    match (quiet, verbose) {
        (2.., _) => LevelFilter::ERROR,
        (1, _) | (0, 0) => LevelFilter::WARN,
        (0, 1) => LevelFilter::INFO,
        (0, 2) => LevelFilter::DEBUG,
        (0, _) => LevelFilter::TRACE,
    }
}

/// Install a stderr subscriber. Malformed `RUST_LOG` directives are skipped.
pub fn init(verbose: u8, quiet: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(verbose, quiet).into())
        .from_env_lossy();

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
