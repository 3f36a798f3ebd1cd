//! Scenarios run against live databases.
//!
//! Each database has its own test file which is skipped unless the matching
//! `MOCKEND_TEST_*_URL` environment variable is set.

mod backend;
pub use backend::Backend;

mod mockend_test;
pub use mockend_test::{Context, MockendTest};

pub mod scenarios;

use std::sync::atomic::{AtomicUsize, Ordering};

#[async_trait::async_trait]
pub trait Setup: Send + Sync + 'static {
    /// Connection URL of the database under test
    fn url(&self) -> &str;

    /// Drop the table or collection backing a model.
    async fn delete_table(&self, name: &str);
}

/// Reads a connection URL from the environment, `None` when the database
/// is not available for this run.
pub fn env_url(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|url| !url.is_empty())
}

/// Returns a model name no other test in this process uses, so tests can
/// run in parallel against one database.
pub fn unique_model(prefix: &str) -> String {
    static NEXT: AtomicUsize = AtomicUsize::new(0);

    format!(
        "{prefix}_{}_{}",
        std::process::id(),
        NEXT.fetch_add(1, Ordering::Relaxed)
    )
}

/// Runs one scenario per test function, skipping when the URL is unset.
#[macro_export]
macro_rules! scenario_tests {
    ($setup:expr; $( $scenario:ident ),* $(,)?) => {
        $(
            #[test]
            fn $scenario() {
                let Some(setup) = $setup else {
                    eprintln!("skipping {}: database URL not set", stringify!($scenario));
                    return;
                };

                $crate::MockendTest::new(setup).run($crate::scenarios::$scenario);
            }
        )*
    };
}
