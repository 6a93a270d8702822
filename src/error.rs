//! Error types for websweep.
//!
//! Per-template failures (`FetchError`) are captured into that template's
//! disposition and never abort the batch. `SweepError` covers the two fatal
//! conditions that stop a run before any fetch is attempted.

/// A failure while fetching and saving a single templated URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection failure, non-resolving host, or malformed URL.
    #[error("network error: {0}")]
    Network(String),

    /// The batch deadline elapsed (or the run was cancelled) before the
    /// request completed.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The page was fetched but could not be written to the output directory.
    /// Treated as a failed fetch: classification never runs on data that was
    /// not durably saved.
    #[error("storage error: {0}")]
    Storage(String),
}

/// A fatal, batch-level failure. Aborts the run before any fetch.
#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The template configuration could not be loaded, or is empty.
    #[error("config error: {0}")]
    Config(String),

    /// The output directory cannot be created or written to.
    #[error("output directory error: {0}")]
    OutputDir(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network() {
        let err = FetchError::Network("dns lookup failed".into());
        assert_eq!(err.to_string(), "network error: dns lookup failed");
    }

    #[test]
    fn display_timeout() {
        let err = FetchError::Timeout("batch deadline exceeded".into());
        assert_eq!(err.to_string(), "timed out: batch deadline exceeded");
    }

    #[test]
    fn display_storage() {
        let err = FetchError::Storage("read-only file system".into());
        assert_eq!(err.to_string(), "storage error: read-only file system");
    }

    #[test]
    fn display_config() {
        let err = SweepError::Config("no templates configured".into());
        assert_eq!(err.to_string(), "config error: no templates configured");
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FetchError>();
        assert_send_sync::<SweepError>();
    }
}
