use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "credit_rater=debug"
    } else {
        "credit_rater=warn"
    }
}

/// Install the global tracing subscriber. Logs go to stderr so stdout stays
/// clean for the results table or JSON.
///
/// `RUST_LOG` takes precedence over the `--verbose` default.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter(verbose))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
}
