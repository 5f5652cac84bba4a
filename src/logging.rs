use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialise the global `tracing` subscriber (stderr, no targets).
///
/// `level` is any `EnvFilter` directive; unparsable values fall back to `warn`.
/// Report output never goes through here: it is written to stdout directly.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_new(level.to_lowercase()).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // keep an already-installed subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
