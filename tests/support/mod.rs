#![allow(dead_code)]

use anyhow::{Context, Result};
use assert_cmd::Command;
use fiori_url::AppCatalog;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FIXTURE_APP_LIST: &str = "tests/fixtures/AppList.json";

pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURE_APP_LIST)
}

pub fn fixture_catalog() -> AppCatalog {
    AppCatalog::load(&fixture_path()).expect("fixture app list loads")
}

/// Write `entries` as an app list inside a fresh temp dir.
///
/// The directory is returned so the file lives as long as the test needs it.
pub fn scratch_app_list(entries: &Value) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new().context("failed to allocate temp dir")?;
    let path = dir.path().join(fiori_url::APP_LIST_FILE);
    std::fs::write(&path, serde_json::to_vec_pretty(entries)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok((dir, path))
}

/// The CLI wired to the fixture catalog with logging silenced.
pub fn cli() -> Command {
    let mut cmd = Command::cargo_bin("fiori-url").expect("fiori-url binary built");
    cmd.env(fiori_url::APP_LIST_ENV, fixture_path())
        .env_remove(fiori_url::logging::LOG_ENV);
    cmd
}
