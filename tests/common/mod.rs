//! Shared helpers for the integration suite.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route library tracing output through the test harness. `RUST_LOG`
/// overrides the filter; the default keeps the label-restoration debug
/// events visible in failing-test output.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formsui=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Stand-in for the transport's player session: records what the form
/// callbacks deliver.
#[derive(Debug, Default)]
pub struct TestPlayer {
    pub name: String,
    pub received: Vec<String>,
}

impl TestPlayer {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            received: Vec::new(),
        }
    }
}
