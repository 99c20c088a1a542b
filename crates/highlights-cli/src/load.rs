//! One load cycle: fetch or read every sheet, then map the collection.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use highlights_fetch::{LoadResult, SheetsClient, load_sheets};
use highlights_ingest::read_sheet_file;
use highlights_map::Collection;
use highlights_model::{LoadState, RawSheet, SheetSpec};

use crate::config::Config;

/// Where sheets come from for this cycle.
#[derive(Debug, Clone)]
pub enum SheetOrigin {
    /// Local CSV exports, one sheet per file.
    Files(Vec<PathBuf>),
    /// The configured spreadsheet.
    Remote(Config),
}

/// Spec for a local file: id is the path, name is the file stem.
#[must_use]
pub fn file_spec(path: &Path) -> SheetSpec {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    SheetSpec::new(path.display().to_string(), name)
}

/// Reads local sheets; an unreadable file becomes a failed sheet.
pub fn read_local_sheets(paths: &[PathBuf]) -> Vec<RawSheet> {
    paths
        .iter()
        .map(|path| {
            let spec = file_spec(path);
            read_sheet_file(path, &spec).unwrap_or_else(|e| {
                tracing::warn!(sheet = %spec.name, error = %e, "Failed to read sheet");
                RawSheet::failed(&spec, format!("Failed to load sheet '{}': {e}", spec.name))
            })
        })
        .collect()
}

/// Fetches every configured sheet concurrently.
pub async fn fetch_remote_sheets(config: &Config) -> LoadResult<Vec<RawSheet>> {
    let client = SheetsClient::new(config.spreadsheet_id.clone(), config.client_options())?;
    tracing::debug!(spreadsheet = client.spreadsheet_id(), "Fetching spreadsheet");
    load_sheets(Arc::new(client), &config.specs()).await
}

/// Runs a cycle and commits its outcome.
///
/// Per-sheet failures stay inside the collection; only configuration
/// problems yield [`LoadState::Failed`].
pub async fn load_collection(origin: &SheetOrigin) -> LoadState<Collection> {
    let sheets = match origin {
        SheetOrigin::Files(paths) => Ok(read_local_sheets(paths)),
        SheetOrigin::Remote(config) => fetch_remote_sheets(config).await,
    };
    LoadState::from_result(sheets.map(Collection::from_sheets))
}
