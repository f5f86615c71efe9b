//! Tracing initialisation for tests

use once_cell::sync::Lazy;

static INIT: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init()
        .ok();
});

/// Installs a test subscriber once per process; safe to call from every test
pub fn init_test_tracing() {
    Lazy::force(&INIT);
}
