//! Telemetry helpers for structured logging.

/// Initialize tracing for the process.
///
/// Installs an env-filtered fmt subscriber unless the host application has
/// already set one of its own.
pub fn init_tracing() {
    if tracing::dispatcher::has_been_set() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
