//! Template configuration.
//!
//! Templates live in a TOML file with a single `[templates]` table mapping
//! template name to URL pattern:
//!
//! ```toml
//! [templates]
//! github = "https://github.com/search?q=%s"
//! rutracker = "https://rutracker.org/forum/tracker.php?nm=%s"
//! ```
//!
//! The file is looked up via the `WEBSWEEP_CONFIG` environment variable, or
//! at `<config dir>/websweep/templates.toml`. Values are plain strings; there
//! is no schema beyond that. An empty template table is a fatal error — with
//! nothing to expand there is nothing to run.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::SweepError;
use crate::types::SearchTemplate;

pub const CONFIG_ENV_VAR: &str = "WEBSWEEP_CONFIG";

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    templates: BTreeMap<String, String>,
}

/// Resolve the configuration file path.
pub fn config_path() -> PathBuf {
    if let Ok(explicit) = env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(explicit);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("websweep")
        .join("templates.toml")
}

/// Load the template set from `path`.
///
/// Template names come back in name order (the mapping itself carries no
/// meaningful order and the orchestrator treats templates as an unordered
/// set anyway).
pub fn load_templates(path: &Path) -> Result<Vec<SearchTemplate>, SweepError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| SweepError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: ConfigFile = toml::from_str(&raw)
        .map_err(|e| SweepError::Config(format!("cannot parse {}: {e}", path.display())))?;

    if parsed.templates.is_empty() {
        return Err(SweepError::Config(format!(
            "no templates configured in {}",
            path.display()
        )));
    }

    Ok(parsed
        .templates
        .into_iter()
        .map(|(name, pattern)| SearchTemplate { name, pattern })
        .collect())
}
