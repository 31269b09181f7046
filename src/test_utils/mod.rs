//! Test utilities for portfolio
//!
//! Helpers for building temporary site roots full of project files, used by
//! the unit tests and, through the `test-utils` feature, by the integration
//! suite.
//!
//! # Example
//!
//! ```rust,no_run
//! use portfolio_cli::test_utils::{ProjectFixture, TestEnvironment};
//!
//! let env = TestEnvironment::new().unwrap();
//! env.add_project(&ProjectFixture::basic("alpha")).unwrap();
//! env.add_project(&ProjectFixture::new("beta.md").field("featured", "true")).unwrap();
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::{ConfigFixture, ProjectFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging
/// stays off. Safe to call from every test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
