//! Runtime discovery of the app list file.
//!
//! The library only ever accepts an already-resolved path; this module holds
//! the search policy the CLI uses to produce one. An explicit path (flag or
//! `FIORI_APP_LIST`) always wins. Otherwise the candidates below are checked in
//! order and the first existing file is used.

use anyhow::{Result, bail};
use std::env;
use std::path::{Path, PathBuf};

/// File name the catalog is shipped under.
pub const APP_LIST_FILE: &str = "AppList.json";

/// Environment variable naming an explicit app list path.
pub const APP_LIST_ENV: &str = "FIORI_APP_LIST";

/// Candidate locations, in search order.
///
/// Covers a binary sitting next to the catalog, one or two levels below it
/// (`bin/`, `target/release/`), the working directory, and finally the
/// directory baked in at build time.
pub fn app_list_candidates(
    exe_dir: Option<&Path>,
    cwd: Option<&Path>,
    build_hint: Option<&Path>,
) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = exe_dir {
        candidates.push(dir.join(APP_LIST_FILE));
        candidates.extend(dir.ancestors().skip(1).take(2).map(|d| d.join(APP_LIST_FILE)));
    }
    if let Some(dir) = cwd {
        candidates.push(dir.join(APP_LIST_FILE));
    }
    if let Some(dir) = build_hint {
        candidates.push(dir.join(APP_LIST_FILE));
    }
    candidates
}

/// First candidate that exists as a regular file.
pub fn first_existing(candidates: &[PathBuf]) -> Option<&PathBuf> {
    candidates.iter().find(|candidate| candidate.is_file())
}

/// Locate the app list for this process.
///
/// `explicit` comes from the command line or `FIORI_APP_LIST` and is returned
/// as-is, even if it does not exist, so the load error names the path the user
/// asked for. Without it, the candidate list is searched and a failure lists
/// every location tried.
pub fn find_app_list(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let cwd = env::current_dir().ok();
    let build_hint = option_env!("FIORI_APP_LIST_HINT").map(PathBuf::from);

    let candidates = app_list_candidates(exe_dir.as_deref(), cwd.as_deref(), build_hint.as_deref());
    if let Some(found) = first_existing(&candidates) {
        tracing::debug!(path = %found.display(), "discovered app list");
        return Ok(found.clone());
    }

    let tried = candidates
        .iter()
        .map(|candidate| format!("  - {}", candidate.display()))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("{APP_LIST_FILE} not found. Tried locations:\n{tried}\nSet {APP_LIST_ENV} or pass --app-list.")
}
