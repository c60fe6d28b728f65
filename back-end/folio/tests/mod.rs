use folio::modules::content::{DeterrenceSecret, Portfolio, StaticSourceStore, TickingClock};
use folio::modules::storage::{KvStore, MemoryKvStore};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

pub mod bootstrap;
pub mod modules;

pub const TEST_SECRET: &str = "open sesame";

#[cfg(test)]
#[ctor::ctor]
fn global_test_setup() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_test_writer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();
}

/// Data directory plus KV store for one test site.
pub struct TestSite {
    pub data: TempDir,
    pub kv: Arc<dyn KvStore>,
}

impl TestSite {
    pub fn new() -> Self {
        Self {
            data: TempDir::new().expect("Failed to create temp dir"),
            kv: Arc::new(MemoryKvStore::new()),
        }
    }

    /// Writes a published file, e.g. `projects.json`.
    pub fn publish(&self, file: &str, json: &str) -> &Self {
        std::fs::write(self.data.path().join(file), json).expect("Failed to write published file");
        self
    }

    pub fn portfolio(&self) -> Portfolio {
        portfolio_over(self.kv.clone(), self.data.path())
    }
}

pub fn portfolio_over(kv: Arc<dyn KvStore>, data_dir: &Path) -> Portfolio {
    Portfolio::new(
        kv,
        StaticSourceStore::new(data_dir),
        DeterrenceSecret::new(TEST_SECRET),
        Arc::new(TickingClock::from_millis(1_736_071_200_000)),
    )
}

pub fn set_envs(envs: &[(&str, &str)]) {
    for (key, value) in envs {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

pub fn remove_envs(keys: &[&str]) {
    for key in keys {
        unsafe {
            std::env::remove_var(key);
        }
    }
}
