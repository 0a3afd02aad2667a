use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber, writing to stderr.
///
/// The filter comes from the settings file only (default `warn`); an
/// unparsable directive falls back to `warn`. Calling this more than once
/// keeps the first subscriber.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
