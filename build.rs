use std::env;
use std::path::PathBuf;

// Bakes the directory that holds the bundled AppList.json into the binary so
// catalog discovery has a last-resort location after the runtime candidates.
fn main() {
    println!("cargo:rerun-if-env-changed=FIORI_APP_LIST_HINT");

    let Some(dir) = env::var_os("FIORI_APP_LIST_HINT")
        .or_else(|| env::var_os("CARGO_MANIFEST_DIR"))
        .map(PathBuf::from)
    else {
        return;
    };

    let dir = dir.canonicalize().unwrap_or(dir);
    if dir.is_dir() {
        println!("cargo:rustc-env=FIORI_APP_LIST_HINT={}", dir.display());
    }
}
