//! Inline per-sheet error lines shared by the collection views.

use highlights_map::Collection;

/// The line shown in place of a failed sheet's data.
pub(crate) fn error_line(error: &str) -> String {
    format!("Error: {error}")
}

/// One error line per failed sheet, or `None` when every sheet loaded.
fn failed_sheet_lines(collection: &Collection) -> Option<String> {
    let lines: Vec<String> = collection
        .failed_sheets()
        .filter_map(|sheet| sheet.error.as_deref())
        .map(error_line)
        .collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// Puts failed-sheet errors above `body`.
pub(crate) fn with_sheet_errors(collection: &Collection, body: String) -> String {
    match failed_sheet_lines(collection) {
        Some(errors) => format!("{errors}\n{body}"),
        None => body,
    }
}

/// Failed-sheet errors, or the neutral `empty` message when nothing failed.
pub(crate) fn sheet_errors_or(collection: &Collection, empty: &str) -> String {
    failed_sheet_lines(collection).unwrap_or_else(|| empty.to_string())
}
