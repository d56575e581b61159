//! Full rewrite of the write-target partition.
//!
//! Writes a sibling temp file, syncs it, then renames it over the target so a
//! crash mid-write never leaves a truncated partition behind.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use parley_core::errors::StoreError;
use parley_core::QaEntry;

/// Serialize `entries` as a pretty-printed JSON array (UTF-8, non-ASCII kept
/// unescaped) and atomically replace `target` with it.
pub fn write_partition(target: &Path, entries: &[QaEntry]) -> Result<(), StoreError> {
    let to_err = |message: String| StoreError::Persistence {
        path: target.display().to_string(),
        message,
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| to_err(e.to_string()))?;
    }

    let json = serde_json::to_string_pretty(entries).map_err(|e| to_err(e.to_string()))?;

    let tmp = temp_path(target);
    let result = (|| -> std::io::Result<()> {
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        std::fs::rename(&tmp, target)
    })();

    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp);
        return Err(to_err(e.to_string()));
    }
    Ok(())
}

fn temp_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}
