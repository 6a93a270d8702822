//! # websweep
//!
//! Fan a folder name out to a set of templated search-engine URLs, fetch
//! every page concurrently, save each body under the target folder, and open
//! a browser tab for the pages that actually contain results.
//!
//! The pipeline tolerates per-URL failure: one dead engine never stops the
//! others, and every configured template ends the run with exactly one
//! disposition (opened, suppressed, or failed).

pub mod browser;
pub mod classify;
pub mod config;
pub mod error;
pub mod fetch;
pub mod orchestrator;
pub mod report;
pub mod template;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

pub use error::{FetchError, SweepError};
pub use types::*;

/// Default bound on the whole batch's network phase.
pub const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared state for one sweep run: the HTTP client, the outbound request
/// limit, and the batch deadline. Passed explicitly to the orchestrator —
/// there is no ambient global configuration.
#[derive(Clone, Debug)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub batch_timeout: Duration,
    // Concurrency control for outbound fetches
    pub outbound_limit: Arc<tokio::sync::Semaphore>,
}

impl AppState {
    pub fn new(http_client: reqwest::Client, batch_timeout: Duration) -> Self {
        Self {
            http_client,
            batch_timeout,
            outbound_limit: Arc::new(tokio::sync::Semaphore::new(32)),
        }
    }
}
