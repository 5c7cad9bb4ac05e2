use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Later calls are no-ops so tests
/// sharing a process can all call this.
pub fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .try_init();
}
