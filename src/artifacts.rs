//! Naming and persistence of data and report artifacts.
//!
//! Both artifact kinds are named from an [`ArtifactKey`]. Data artifacts are
//! overwritten on a repeated key; report artifacts never are, a numeric
//! suffix is appended instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::types::ArtifactKey;
use crate::{AppError, Result};

const REPORT_EXT: &str = ".md";
const DATA_EXT: &str = ".json";

/// `{venue}_{pair}_{start}_{end}` with `:` replaced by `-` in the timestamps.
pub fn base_name(venue_id: &str, pair_id: &str, start: &str, end: &str) -> String {
    format!(
        "{}_{}_{}_{}",
        venue_id,
        pair_id,
        start.replace(':', "-"),
        end.replace(':', "-")
    )
}

/// Picks a report path in `directory` that does not clash with earlier reports.
///
/// Existing `{base}*.md` files are scanned and the text after the last `-` is
/// read as a sequence number. A base name that itself ends in `-<digits>` is
/// misread as already numbered; callers rely on this exact behaviour.
pub fn resolve_report_path(directory: impl AsRef<Path>, base: &str) -> Result<PathBuf> {
    let directory = directory.as_ref();
    let existing = matching_reports(directory, base)?;

    if existing.is_empty() {
        return Ok(directory.join(format!("{base}{REPORT_EXT}")));
    }

    let next = existing
        .iter()
        .filter_map(|name| report_suffix(name))
        .max()
        .unwrap_or(0)
        + 1;

    Ok(directory.join(format!("{base}-{next}{REPORT_EXT}")))
}

fn matching_reports(directory: &Path, base: &str) -> Result<Vec<String>> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(AppError::io(directory, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AppError::io(directory, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(base) && name.ends_with(REPORT_EXT) {
            names.push(name);
        }
    }
    Ok(names)
}

fn report_suffix(file_name: &str) -> Option<u64> {
    let tail = file_name.rsplit('-').next()?;
    let candidate = tail.split(REPORT_EXT).next()?;
    if candidate.is_empty() || !candidate.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    candidate.parse().ok()
}

/// Data artifact path, built by plain concatenation.
///
/// `directory` must already end with a path separator; no separator is
/// inserted between it and the file name.
pub fn data_path(directory: &str, key: &ArtifactKey) -> PathBuf {
    PathBuf::from(format!("{}{}{}", directory, key.base_name(), DATA_EXT))
}

/// Returns the cached data artifact for `key` if one exists in `directory`.
pub fn find_existing(directory: impl AsRef<Path>, key: &ArtifactKey) -> Option<PathBuf> {
    let candidate = directory
        .as_ref()
        .join(format!("{}{}", key.base_name(), DATA_EXT));
    candidate.is_file().then_some(candidate)
}

pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|e| AppError::io(path, e))
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| AppError::io(path, e))
}

/// Writes the report under a collision-free name and returns where it went.
pub fn save_report(directory: impl AsRef<Path>, key: &ArtifactKey, report: &str) -> Result<PathBuf> {
    let path = resolve_report_path(directory, &key.base_name())?;
    write_text(&path, report)?;
    info!("Output saved to: {}", path.display());
    Ok(path)
}

/// Writes the raw data payload, replacing any artifact with the same key.
pub fn save_data(directory: &str, key: &ArtifactKey, payload: &str) -> Result<PathBuf> {
    let path = data_path(directory, key);
    write_text(&path, payload)?;
    info!("Data saved to: {}", path.display());
    Ok(path)
}
