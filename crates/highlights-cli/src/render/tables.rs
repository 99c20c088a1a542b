//! Tabular views: raw sheets and the joined highlight list.

use comfy_table::Table;

use highlights_map::Collection;
use highlights_model::RawSheet;

use super::cell::CellKind;
use super::notice::{error_line, sheet_errors_or, with_sheet_errors};
use super::style::{apply_table_style, dim_cell, header_cell};

/// Shown by the list view when there is nothing to list.
pub const EMPTY_LIST_MESSAGE: &str = "No book highlights found.";

const LIST_COLUMNS: [&str; 7] = [
    "Cover",
    "Title",
    "Author",
    "Genre",
    "Year",
    "Highlight",
    "Goodreads",
];

/// One table for a parsed sheet, cells styled by header.
pub fn sheet_table(sheet: &RawSheet) -> Table {
    let mut table = Table::new();
    table.set_header(sheet.headers.iter().map(|h| header_cell(h)));
    apply_table_style(&mut table);
    let kinds: Vec<CellKind> = sheet
        .headers
        .iter()
        .map(|h| CellKind::for_header(h))
        .collect();
    for row in &sheet.rows {
        table.add_row(
            kinds
                .iter()
                .zip(row)
                .map(|(kind, value)| kind.cell(value)),
        );
    }
    table
}

/// Every sheet in configured order, each under its own heading.
///
/// A failed sheet shows its error in place; a sheet without headers or
/// rows shows "No data".
pub fn render_sheets(sheets: &[RawSheet]) -> String {
    let mut sections = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let heading = format!("{} [{}]", sheet.sheet_name, sheet.role);
        let body = match &sheet.error {
            Some(error) => error_line(error),
            None if sheet.headers.is_empty() || sheet.is_empty() => "No data".to_string(),
            None => sheet_table(sheet).to_string(),
        };
        sections.push(format!("{heading}\n{body}"));
    }
    sections.join("\n\n")
}

/// One row per highlight joined to its book.
pub fn list_table(collection: &Collection) -> Table {
    let mut table = Table::new();
    table.set_header(LIST_COLUMNS.iter().map(|label| header_cell(label)));
    apply_table_style(&mut table);
    for (book, highlight) in collection.joined() {
        let book = book.cloned().unwrap_or_default();
        let values = [
            book.cover_image.as_str(),
            book.title.as_str(),
            book.author.as_str(),
            book.genre.as_str(),
            book.publication_year.as_str(),
            highlight.highlight.as_str(),
            book.goodreads_link.as_str(),
        ];
        let mut cells: Vec<_> = LIST_COLUMNS
            .iter()
            .zip(values)
            .map(|(label, value)| CellKind::for_header(label).cell(value))
            .collect();
        if book.title.is_empty() {
            cells[1] = dim_cell(&highlight.book_id);
        }
        table.add_row(cells);
    }
    table
}

/// The list view below an error line for each failed sheet.
///
/// Without highlights, only the errors are shown, or
/// [`EMPTY_LIST_MESSAGE`] when no sheet failed.
pub fn render_list(collection: &Collection) -> String {
    if collection.highlights.is_empty() {
        return sheet_errors_or(collection, EMPTY_LIST_MESSAGE);
    }
    with_sheet_errors(collection, list_table(collection).to_string())
}
