use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::ScheduleError;

/// Loads and parses one JSON document. An absent, unreadable or
/// syntactically invalid file is a missing document: the caller is expected
/// to stop rather than aggregate partial inputs.
pub fn load_json_file<P: AsRef<Path>>(path: P) -> Result<Value, ScheduleError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| ScheduleError::MissingDocument {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| ScheduleError::MissingDocument {
        path: path.display().to_string(),
        reason: format!("invalid JSON: {}", e),
    })
}

/// Lists the .json files in a directory, sorted lexicographically by file
/// name. That order defines snapshot processing order, which matters when
/// two snapshots carry the same date (the later file wins).
pub fn discover_snapshots<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>, ScheduleError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| ScheduleError::MissingDocument {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    paths.sort();
    Ok(paths)
}
