//! Concurrent fetch-and-classify pipeline.
//!
//! Expands every template with the search term, fans the fetches out
//! concurrently under one shared deadline, then classifies each saved page
//! and signals the browser opener for the ones that look like hits. Every
//! template produces exactly one [`Disposition`]; per-entry failures are
//! captured there and never abort the batch.

use std::path::Path;
use std::sync::Arc;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::browser::OpenUrl;
use crate::classify;
use crate::error::FetchError;
use crate::fetch;
use crate::template;
use crate::types::{Disposition, DispositionKind, FetchOutcome, SearchTemplate};
use crate::AppState;

/// Run one sweep: fetch, classify, and open every template for `term`.
///
/// Completion order between fetches is unconstrained; outcomes are tied back
/// to their template by name. The returned vector has one entry per input
/// template, in input order.
pub async fn run_sweep(
    state: &Arc<AppState>,
    templates: &[SearchTemplate],
    term: &str,
    out_dir: &Path,
    opener: &dyn OpenUrl,
    cancel: CancellationToken,
) -> Vec<Disposition> {
    let deadline = Instant::now() + state.batch_timeout;

    let fetches: Vec<_> = templates
        .iter()
        .map(|t| {
            let state = Arc::clone(state);
            let name = t.name.clone();
            let url = template::expand(&t.pattern, term);
            let out_dir = out_dir.to_path_buf();
            let cancel = cancel.clone();
            async move {
                info!(name = %name, url = %url, "processing");
                let result = fetch_one(&state, &url, &out_dir, deadline, cancel).await;
                FetchOutcome { name, url, result }
            }
        })
        .collect();

    let outcomes = futures::future::join_all(fetches).await;

    let mut dispositions = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let kind = match outcome.result {
            Ok(saved) => {
                if classify::saved_page_has_results(&saved).await {
                    info!(name = %outcome.name, url = %outcome.url, "results found, opening browser");
                    if let Err(err) = opener.open(&outcome.url) {
                        warn!(name = %outcome.name, error = %err, "browser open failed");
                    }
                    DispositionKind::Opened
                } else {
                    info!(name = %outcome.name, "no results, suppressing");
                    DispositionKind::Suppressed
                }
            }
            Err(err) => {
                warn!(name = %outcome.name, url = %outcome.url, error = %err, "fetch failed");
                DispositionKind::FetchFailed(err.to_string())
            }
        };
        dispositions.push(Disposition::new(outcome.name, outcome.url, kind));
    }

    dispositions
}

/// Fetch one URL under the shared deadline and cancellation token.
async fn fetch_one(
    state: &AppState,
    url: &str,
    out_dir: &Path,
    deadline: Instant,
    cancel: CancellationToken,
) -> Result<std::path::PathBuf, FetchError> {
    let _permit = state.outbound_limit.acquire().await.expect("semaphore closed");

    tokio::select! {
        _ = cancel.cancelled() => {
            Err(FetchError::Timeout("cancelled before completion".into()))
        }
        fetched = tokio::time::timeout_at(deadline, fetch::fetch_and_save(&state.http_client, url, out_dir)) => {
            match fetched {
                Ok(result) => result,
                Err(_) => Err(FetchError::Timeout(format!(
                    "batch deadline of {:?} exceeded",
                    state.batch_timeout
                ))),
            }
        }
    }
}
