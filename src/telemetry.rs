use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber writing to stderr so that results printed on
/// stdout stay clean. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_subscriber(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A subscriber may already be set, e.g. by a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .try_init();
}
