// Logging setup
//
// RUST_LOG wins when set, otherwise the configured level. Output goes to
// stderr so stdout stays clean for the ranked table or JSON.

use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter the subscriber will use
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber
///
/// Calling it a second time is a no-op.
pub fn init_logging(level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_fine() {
        init_logging("debug");
        init_logging("info");
        tracing::info!("logging initialised");
    }

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage
        let _ = build_filter("definitely=not=a=level");
    }
}
