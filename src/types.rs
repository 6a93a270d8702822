use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::FetchError;

/// A named URL pattern with an optional `%s`/`%S` placeholder for the
/// search term. Immutable once loaded from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTemplate {
    pub name: String,
    pub pattern: String,
}

impl SearchTemplate {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// The result of fetching one templated URL: either the path the body was
/// saved to, or the failure that prevented it.
#[derive(Debug)]
pub struct FetchOutcome {
    pub name: String,
    pub url: String,
    pub result: Result<PathBuf, FetchError>,
}

/// Final classification of one template's run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DispositionKind {
    /// The page looked like it contains results; the browser was signalled.
    Opened,
    /// A no-results marker was found in the saved page.
    Suppressed,
    /// The fetch (or save) failed; the page was never classified.
    FetchFailed(String),
}

/// One reported line per template: the template's name, the concrete URL it
/// expanded to, and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disposition {
    pub name: String,
    pub url: String,
    #[serde(flatten)]
    pub kind: DispositionKind,
}

impl Disposition {
    pub fn new(name: impl Into<String>, url: impl Into<String>, kind: DispositionKind) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            kind,
        }
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DispositionKind::Opened => write!(f, "{}: opened {}", self.name, self.url),
            DispositionKind::Suppressed => {
                write!(f, "{}: no results, not opening", self.name)
            }
            DispositionKind::FetchFailed(reason) => {
                write!(f, "{}: fetch failed ({})", self.name, reason)
            }
        }
    }
}
