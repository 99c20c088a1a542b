//! Per-sheet fetching and the concurrent fan-out over all sheets.

use std::collections::BTreeSet;
use std::sync::Arc;

use highlights_ingest::parse_sheet;
use highlights_model::{RawSheet, SheetSpec};

use crate::error::{FetchError, LoadError, LoadResult};
use crate::source::SheetSource;

/// Fetches and parses one sheet.
///
/// Never fails: a transport error yields a [`RawSheet`] with no data and an
/// `error` naming the sheet and the cause.
pub async fn fetch_sheet<S: SheetSource>(source: &S, spec: &SheetSpec) -> RawSheet {
    match source.fetch_csv(spec).await {
        Ok(text) => {
            let parsed = parse_sheet(&text);
            tracing::debug!(
                sheet = %spec.name,
                columns = parsed.headers.len(),
                rows = parsed.rows.len(),
                "Parsed sheet"
            );
            RawSheet::parsed(spec, parsed.headers, parsed.rows)
        }
        Err(error) => failed_sheet(spec, &error),
    }
}

fn failed_sheet(spec: &SheetSpec, error: &FetchError) -> RawSheet {
    tracing::warn!(sheet = %spec.name, id = %spec.id, %error, "Failed to fetch sheet");
    RawSheet::failed(spec, format!("Failed to load sheet '{}': {error}", spec.name))
}

/// Fetches every sheet concurrently and returns them in `specs` order.
///
/// Each sheet runs in its own task. A failing or panicking task only marks
/// its own sheet as failed; the call returns once every task has finished.
/// There is no retry and no cancellation.
pub async fn fetch_all<S: SheetSource>(source: Arc<S>, specs: &[SheetSpec]) -> Vec<RawSheet> {
    let tasks: Vec<_> = specs
        .iter()
        .map(|spec| {
            let source = Arc::clone(&source);
            let owned = spec.clone();
            let handle = tokio::spawn(async move { fetch_sheet(source.as_ref(), &owned).await });
            (spec, handle)
        })
        .collect();

    let mut sheets = Vec::with_capacity(tasks.len());
    for (spec, handle) in tasks {
        let sheet = match handle.await {
            Ok(sheet) => sheet,
            Err(join_error) => failed_sheet(spec, &FetchError::Task(join_error.to_string())),
        };
        sheets.push(sheet);
    }

    let failed = sheets.iter().filter(|s| s.is_failed()).count();
    tracing::info!(
        sheets = sheets.len(),
        failed,
        rows = sheets.iter().map(|s| s.rows.len()).sum::<usize>(),
        "Fetched all sheets"
    );
    sheets
}

/// Validates the sheet list, then runs [`fetch_all`].
///
/// Only configuration problems are returned as errors; per-sheet failures
/// are inside the returned sheets.
pub async fn load_sheets<S: SheetSource>(
    source: Arc<S>,
    specs: &[SheetSpec],
) -> LoadResult<Vec<RawSheet>> {
    if specs.is_empty() {
        return Err(LoadError::NoSheets);
    }
    let mut seen = BTreeSet::new();
    for spec in specs {
        if !seen.insert(spec.id.as_str()) {
            return Err(LoadError::DuplicateSheet(spec.id.clone()));
        }
    }
    Ok(fetch_all(source, specs).await)
}
