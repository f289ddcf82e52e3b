//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test default-file loading and failure modes.
//! - Test overlay selection, merging, and tolerance for missing files.
//! - Test environment bindings, automatic capture, and precedence.
//!
//! Does NOT handle:
//! - Environment-variable name derivation (tested in env.rs).
//! - Typed getter behavior over in-memory state (tested in facade.rs).
//!
//! Invariants:
//! - Tests touching the process environment use `serial_test` and
//!   `env_lock()` to prevent environment variable pollution.
//! - Tests not touching the process environment inject a deterministic
//!   lookup via `with_env_lookup`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;

pub mod overlay_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Create a temporary `config/` directory containing a default file
/// with the given contents, returning the directory guard and the file
/// prefix to pass to the loader.
pub fn setup_config_dir(extension: &str, default_contents: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("default.{extension}")), default_contents).unwrap();
    let prefix = format!("{}/", dir.display());
    (tmp, prefix)
}

/// Write an additional config file next to the default file.
pub fn write_config_file(prefix: &str, name: &str, extension: &str, contents: &str) {
    fs::write(Path::new(&format!("{prefix}{name}.{extension}")), contents).unwrap();
}
