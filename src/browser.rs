//! Browser-launch collaborator.
//!
//! The orchestrator only emits "open this URL" signals through the [`OpenUrl`]
//! seam; how a tab actually appears is this module's problem. Tests substitute
//! a recording implementation.

use std::io;
use std::process::Command;

/// Receives "open this URL" signals for pages that look like hits.
pub trait OpenUrl: Send + Sync {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs in the system default browser.
///
/// Tries `xdg-open` first, then a list of common browsers.
pub struct SystemOpener;

const FALLBACK_BROWSERS: &[&str] = &["firefox", "google-chrome", "chromium", "brave-browser"];

impl OpenUrl for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        if Command::new("xdg-open").arg(url).spawn().is_ok() {
            return Ok(());
        }

        for browser in FALLBACK_BROWSERS {
            if Command::new(browser).arg(url).spawn().is_ok() {
                return Ok(());
            }
        }

        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "could not find a browser to open the URL",
        ))
    }
}

/// Test double that records every URL it is asked to open.
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOpener {
    pub opened: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl OpenUrl for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.lock().expect("lock poisoned").push(url.to_string());
        Ok(())
    }
}

/// Test double whose opens always fail.
#[cfg(test)]
pub struct FailingOpener;

#[cfg(test)]
impl OpenUrl for FailingOpener {
    fn open(&self, _url: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no browser in test"))
    }
}
