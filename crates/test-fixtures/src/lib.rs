//! Test fixture loader for Parley QA partitions and intent documents.
//!
//! Provides typed deserialization of fixture JSON files and helpers that copy
//! fixtures into scratch directories, so tests that mutate a partition never
//! touch the checked-in copy.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    loop {
        if path.file_name().is_some_and(|n| n == "test-fixtures") && path.join("qa").exists() {
            return path;
        }
        let candidate = path.join("crates").join("test-fixtures");
        if candidate.join("qa").exists() {
            return candidate;
        }
        let sibling = path.join("test-fixtures");
        if sibling.join("qa").exists() {
            return sibling;
        }
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Copy a fixture into `dir`, keeping its file name. Returns the new path.
///
/// # Panics
/// Panics if the fixture can't be copied.
pub fn copy_fixture_to(relative_path: &str, dir: &Path) -> PathBuf {
    let src = fixture_path(relative_path);
    let name = src
        .file_name()
        .unwrap_or_else(|| panic!("Fixture path has no file name: {relative_path}"));
    let dest = dir.join(name);
    std::fs::copy(&src, &dest)
        .unwrap_or_else(|e| panic!("Failed to copy fixture {}: {}", src.display(), e));
    dest
}
