//! Single-URL fetch and save.
//!
//! One HTTP GET per templated URL, body persisted to `<host>.html` in the
//! output directory before any classification happens. Requests go out with
//! a rotating browser User-Agent and bounded redirects.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};
use url::Url;

use crate::error::FetchError;

/// User agents for rotation.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
];

fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS[rng.gen_range(0..USER_AGENTS.len())]
}

/// Build the shared HTTP client used for every fetch in a run.
///
/// `timeout` doubles as the per-request ceiling; the orchestrator enforces
/// the batch-wide deadline on top of it.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
}

/// Derive the `<host>.html` filename for a URL.
///
/// The host component keeps any explicit port (`example.com.html`,
/// `127.0.0.1:8080.html`); for URLs the parser rejects, falls back to the
/// text between `//` and the next `/`.
pub fn host_filename(url: &str) -> Option<String> {
    let host = Url::parse(url)
        .ok()
        .and_then(|u| {
            u.host_str().map(|host| match u.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_owned(),
            })
        })
        .or_else(|| {
            url.split_once("//")
                .map(|(_, rest)| rest.split('/').next().unwrap_or(rest).to_owned())
        })?;
    if host.is_empty() {
        return None;
    }
    Some(format!("{host}.html"))
}

/// GET `url` and persist the body into `out_dir`.
///
/// Returns the saved path. Non-2xx statuses still count as successful
/// fetches; the body is saved and left for the classifier to judge. Two URLs
/// on the same host share a filename and the later write wins.
pub async fn fetch_and_save(
    client: &reqwest::Client,
    url: &str,
    out_dir: &Path,
) -> Result<PathBuf, FetchError> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .header("User-Agent", random_user_agent())
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.5")
        .send()
        .await
        .map_err(classify_reqwest_error)?;

    let status = response.status();
    let body = response.text().await.map_err(classify_reqwest_error)?;

    let filename = host_filename(url)
        .ok_or_else(|| FetchError::Storage(format!("cannot derive filename for {url}")))?;
    let path = out_dir.join(filename);

    tokio::fs::write(&path, &body)
        .await
        .map_err(|e| FetchError::Storage(format!("writing {}: {e}", path.display())))?;

    info!(url, status = status.as_u16(), path = %path.display(), bytes = body.len(), "page saved");
    Ok(path)
}

fn classify_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(err.to_string())
    } else {
        FetchError::Network(err.to_string())
    }
}
