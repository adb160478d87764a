//! Shared test helpers.

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temp directory holding a hosts file with the given content.
/// Uses current dir (workspace) so sandbox allows full access.
pub fn temp_hosts(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::Builder::new()
        .prefix("hosts_test_")
        .tempdir_in(std::env::current_dir().unwrap_or_else(|_| std::path::Path::new(".").into()))
        .expect("temp dir");
    let path = dir.path().join("hosts");
    std::fs::write(&path, content).expect("write hosts fixture");
    (dir, path)
}

/// Run a closure with HOSTS_FILE set to the given path.
pub fn with_hosts_env<F, R>(hosts_file: &std::path::Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let prev = std::env::var_os("HOSTS_FILE");
    std::env::set_var("HOSTS_FILE", hosts_file);
    let r = f();
    match prev {
        Some(v) => std::env::set_var("HOSTS_FILE", v),
        None => std::env::remove_var("HOSTS_FILE"),
    }
    r
}
