//! Snapshot Output
//!
//! Writes `latest.json` for the frontend plus a dated copy kept as history.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Snapshot;
use crate::error::{CollectError, CollectResult};

pub const LATEST_FILE: &str = "latest.json";

fn write_file(path: &Path, contents: &str) -> CollectResult<()> {
    fs::write(path, contents).map_err(|source| CollectError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the snapshot; returns the paths of (latest, dated) files
pub fn write_snapshot(
    out_dir: &Path,
    snapshot: &Snapshot,
    date: NaiveDate,
) -> CollectResult<(PathBuf, PathBuf)> {
    fs::create_dir_all(out_dir).map_err(|source| CollectError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let json = serde_json::to_string_pretty(snapshot)?;

    let latest = out_dir.join(LATEST_FILE);
    write_file(&latest, &json)?;

    let dated = out_dir.join(format!("{}.json", date.format("%Y-%m-%d")));
    write_file(&dated, &json)?;

    tracing::info!(
        latest = %latest.display(),
        dated = %dated.display(),
        items = snapshot.items.len(),
        "snapshot written"
    );
    Ok((latest, dated))
}
