//! Run summary persisted next to the saved pages.
//!
//! `report.json` records what a sweep did: the search term, when it started,
//! and the final disposition of every template. Writing it is best-effort —
//! the caller logs a failure and moves on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{Disposition, DispositionKind};

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub term: String,
    pub started_at: DateTime<Utc>,
    pub opened: usize,
    pub suppressed: usize,
    pub failed: usize,
    pub dispositions: Vec<Disposition>,
}

impl RunReport {
    pub fn new(term: impl Into<String>, started_at: DateTime<Utc>, dispositions: Vec<Disposition>) -> Self {
        let count = |want: fn(&DispositionKind) -> bool| {
            dispositions.iter().filter(|d| want(&d.kind)).count()
        };
        Self {
            term: term.into(),
            started_at,
            opened: count(|k| matches!(k, DispositionKind::Opened)),
            suppressed: count(|k| matches!(k, DispositionKind::Suppressed)),
            failed: count(|k| matches!(k, DispositionKind::FetchFailed(_))),
            dispositions,
        }
    }
}

/// Write the report as pretty JSON into `dir`, returning the file path.
pub async fn write_report(dir: &Path, report: &RunReport) -> Result<PathBuf> {
    let path = dir.join("report.json");
    let json = serde_json::to_string_pretty(report).context("serializing run report")?;
    tokio::fs::write(&path, json)
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dispositions() -> Vec<Disposition> {
        vec![
            Disposition::new("github", "https://github.com/search?q=x", DispositionKind::Opened),
            Disposition::new("bing", "https://bing.com/search?q=x", DispositionKind::Suppressed),
            Disposition::new(
                "dead",
                "https://dead.example/x",
                DispositionKind::FetchFailed("network error: dns lookup failed".into()),
            ),
        ]
    }

    #[test]
    fn counts_match_dispositions() {
        let report = RunReport::new("x", Utc::now(), sample_dispositions());
        assert_eq!(report.opened, 1);
        assert_eq!(report.suppressed, 1);
        assert_eq!(report.failed, 1);
    }

    #[tokio::test]
    async fn report_round_trips_through_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let report = RunReport::new("myapp", Utc::now(), sample_dispositions());

        let path = write_report(dir.path(), &report).await.expect("write");
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), "report.json");

        let raw = std::fs::read_to_string(&path).expect("read");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
        assert_eq!(parsed["term"], "myapp");
        assert_eq!(parsed["dispositions"].as_array().expect("array").len(), 3);
        assert_eq!(parsed["dispositions"][0]["status"], "opened");
    }

    #[tokio::test]
    async fn write_into_missing_dir_fails() {
        let report = RunReport::new("x", Utc::now(), vec![]);
        let err = write_report(Path::new("/nonexistent-websweep-report"), &report).await;
        assert!(err.is_err());
    }
}
