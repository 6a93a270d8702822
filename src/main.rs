use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use websweep::browser::SystemOpener;
use websweep::report::RunReport;
use websweep::{config, fetch, orchestrator, report, AppState, SweepError, DEFAULT_BATCH_TIMEOUT};

/// Subdirectory of the target folder that receives saved pages.
const OUTPUT_SUBDIR: &str = "Installer";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw_path = match env::args().nth(1) {
        Some(arg) => arg,
        None => env::current_dir()
            .context("cannot determine current directory")?
            .to_string_lossy()
            .into_owned(),
    };
    let target = sanitize_target(&raw_path);
    let term = folder_name(&target)
        .with_context(|| format!("could not determine folder name from {}", target.display()))?;

    info!("working in directory: {}", target.display());
    info!("selected folder: {}", term);

    let out_dir = prepare_output_dir(&target)?;

    let templates = config::load_templates(&config::config_path())?;
    info!("loaded {} search templates", templates.len());

    let http_client = fetch::build_client(DEFAULT_BATCH_TIMEOUT)
        .context("failed to build HTTP client")?;
    let state = Arc::new(AppState::new(http_client, DEFAULT_BATCH_TIMEOUT));
    let cancel = CancellationToken::new();

    let started_at = chrono::Utc::now();
    let dispositions = orchestrator::run_sweep(
        &state,
        &templates,
        &term,
        &out_dir,
        &SystemOpener,
        cancel,
    )
    .await;

    for disposition in &dispositions {
        println!("{disposition}");
    }

    let run_report = RunReport::new(term, started_at, dispositions);
    match report::write_report(&out_dir, &run_report).await {
        Ok(path) => info!("run report written to {}", path.display()),
        Err(err) => warn!("failed to write run report: {err:#}"),
    }

    Ok(())
}

/// Strip the trailing drive-letter artifact Total Commander appends to `%P`
/// when passing the active panel path on the command line.
fn sanitize_target(raw: &str) -> PathBuf {
    let trimmed = raw
        .strip_suffix('C')
        .or_else(|| raw.strip_suffix('D'))
        .unwrap_or(raw);
    PathBuf::from(trimmed)
}

/// The search term is the final path component, trailing separators ignored.
fn folder_name(path: &Path) -> Option<String> {
    path.file_name().map(|name| name.to_string_lossy().into_owned())
}

/// Verify the target directory and create the output subdirectory inside it.
///
/// Both checks are fatal: with nowhere to save pages there is nothing to run.
fn prepare_output_dir(target: &Path) -> Result<PathBuf, SweepError> {
    if !target.is_dir() {
        return Err(SweepError::OutputDir(format!(
            "directory does not exist: {}",
            target.display()
        )));
    }
    let out_dir = target.join(OUTPUT_SUBDIR);
    fs::create_dir_all(&out_dir)
        .map_err(|e| SweepError::OutputDir(format!("cannot create {}: {e}", out_dir.display())))?;
    info!("saving pages into {}", out_dir.display());
    Ok(out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_trailing_drive_letter() {
        assert_eq!(sanitize_target(r"\\share\apps\MyAppD"), PathBuf::from(r"\\share\apps\MyApp"));
        assert_eq!(sanitize_target("/srv/apps/MyAppC"), PathBuf::from("/srv/apps/MyApp"));
    }

    #[test]
    fn sanitize_leaves_ordinary_paths_alone() {
        assert_eq!(sanitize_target("/srv/apps/myapp"), PathBuf::from("/srv/apps/myapp"));
    }

    #[test]
    fn folder_name_is_last_component() {
        assert_eq!(folder_name(Path::new("/srv/apps/MyApp")).as_deref(), Some("MyApp"));
        assert_eq!(folder_name(Path::new("/srv/apps/MyApp/")).as_deref(), Some("MyApp"));
    }

    #[test]
    fn folder_name_of_root_is_none() {
        assert_eq!(folder_name(Path::new("/")), None);
    }

    #[test]
    fn prepare_output_dir_rejects_missing_target() {
        let err = prepare_output_dir(Path::new("/nonexistent-websweep-target")).expect_err("must fail");
        assert!(matches!(err, SweepError::OutputDir(_)));
    }

    #[test]
    fn prepare_output_dir_creates_subdir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = prepare_output_dir(dir.path()).expect("prepare");
        assert!(out.is_dir());
        assert_eq!(out.file_name().unwrap().to_str().unwrap(), OUTPUT_SUBDIR);
    }
}
