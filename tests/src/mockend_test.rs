use crate::{Backend, Setup};

use std::{future::Future, sync::Arc};

/// Owns the runtime a scenario runs on and drops every table the scenario
/// created, even when it panics.
pub struct MockendTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Arc<S>,
    tables: Arc<std::sync::Mutex<Vec<String>>>,
}

impl<S: Setup> MockendTest<S> {
    pub fn new(setup: S) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Arc::new(setup),
            tables: Arc::default(),
        }
    }

    pub fn run<F, Fut>(&mut self, scenario: F)
    where
        F: FnOnce(Context) -> Fut,
        Fut: Future<Output = ()>,
    {
        let cx = Context {
            url: self.setup.url().to_string(),
            tables: self.tables.clone(),
        };

        self.runtime.block_on(scenario(cx));
    }
}

impl<S: Setup> Drop for MockendTest<S> {
    fn drop(&mut self) {
        let tables = std::mem::take(&mut *self.tables.lock().unwrap_or_else(|e| e.into_inner()));
        let setup = self.setup.clone();

        self.runtime.block_on(async move {
            for table in tables {
                setup.delete_table(&table).await;
            }
        });
    }
}

/// Handed to each scenario.
pub struct Context {
    url: String,
    tables: Arc<std::sync::Mutex<Vec<String>>>,
}

impl Context {
    /// Starts a backend for a fresh `teacher` model with every field type.
    pub async fn start(&self) -> Backend {
        let backend = Backend::start(&self.url, &crate::unique_model("teacher")).await;
        self.tables
            .lock()
            .unwrap()
            .push(backend.table_name());
        backend
    }
}
