//! Row-to-record mapping for books and highlights.

use highlights_model::{Book, Highlight, RawSheet};

use crate::rules::{BOOK_RULES, BookField, HIGHLIGHT_RULES, HighlightField, bind_columns};

fn cell(row: &[String], column: Option<usize>) -> String {
    column
        .and_then(|idx| row.get(idx))
        .cloned()
        .unwrap_or_default()
}

fn assign(book: &mut Book, field: BookField, value: String) {
    let slot = match field {
        BookField::BookId => &mut book.book_id,
        BookField::Title => &mut book.title,
        BookField::Author => &mut book.author,
        BookField::Genre => &mut book.genre,
        BookField::PublicationYear => &mut book.publication_year,
        BookField::CoverImage => &mut book.cover_image,
        BookField::GoodreadsLink => &mut book.goodreads_link,
    };
    *slot = value;
}

/// Maps a sheet's rows onto books.
///
/// Unmatched columns are ignored. Rows without a `book_id` are dropped.
/// A failed or empty sheet yields no books.
pub fn map_to_books(sheet: &RawSheet) -> Vec<Book> {
    if sheet.is_failed() || sheet.is_empty() {
        return Vec::new();
    }

    let binding = bind_columns(BOOK_RULES, &sheet.headers);
    let mut books = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        let mut book = Book::default();
        for &(idx, field) in &binding.bound {
            assign(&mut book, field, cell(row, Some(idx)));
        }
        if book.book_id.is_empty() {
            continue;
        }
        books.push(book);
    }

    let dropped = sheet.rows.len() - books.len();
    if dropped > 0 {
        tracing::trace!(sheet = %sheet.sheet_name, dropped, "Dropped rows without book_id");
    }
    books
}

/// Maps a sheet's rows onto highlights.
///
/// Columns that match no highlight field are kept in `extra` under their
/// original header. Rows missing `book_id` or `highlight` are dropped.
/// A failed or empty sheet yields no highlights.
pub fn map_to_highlights(sheet: &RawSheet) -> Vec<Highlight> {
    if sheet.is_failed() || sheet.is_empty() {
        return Vec::new();
    }

    let binding = bind_columns(HIGHLIGHT_RULES, &sheet.headers);
    let book_id_col = binding.column_of(HighlightField::BookId);
    let highlight_col = binding.column_of(HighlightField::Highlight);

    let mut highlights = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        let book_id = cell(row, book_id_col);
        let highlight = cell(row, highlight_col);
        if book_id.is_empty() || highlight.is_empty() {
            continue;
        }
        let extra = binding
            .unbound
            .iter()
            .map(|&idx| (sheet.headers[idx].clone(), cell(row, Some(idx))))
            .collect();
        highlights.push(Highlight {
            book_id,
            highlight,
            extra,
        });
    }

    let dropped = sheet.rows.len() - highlights.len();
    if dropped > 0 {
        tracing::trace!(
            sheet = %sheet.sheet_name,
            dropped,
            "Dropped rows without book_id or highlight"
        );
    }
    highlights
}

#[cfg(test)]
mod tests {
    use highlights_model::SheetSpec;

    use super::*;

    fn sheet(headers: &[&str], rows: &[&[&str]]) -> RawSheet {
        RawSheet::parsed(
            &SheetSpec::new("0", "Sheet"),
            headers.iter().map(|h| (*h).to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| (*c).to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn maps_reordered_book_columns() {
        let sheet = sheet(
            &["Author", "Title", "Book ID", "Goodreads Link"],
            &[&["Herbert", "Dune", "1", "https://goodreads.com/1"]],
        );
        let books = map_to_books(&sheet);
        assert_eq!(
            books,
            vec![Book {
                book_id: "1".to_string(),
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                goodreads_link: "https://goodreads.com/1".to_string(),
                ..Book::default()
            }]
        );
    }

    #[test]
    fn drops_books_without_id() {
        let sheet = sheet(&["book_id", "title"], &[&["", "Untitled"], &["2", "Emma"]]);
        let books = map_to_books(&sheet);
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Emma");
    }

    #[test]
    fn failed_sheet_maps_to_nothing() {
        let failed = RawSheet::failed(&SheetSpec::new("0", "Books"), "Books: HTTP 500");
        assert!(map_to_books(&failed).is_empty());
        assert!(map_to_highlights(&failed).is_empty());
    }

    #[test]
    fn headers_only_sheet_maps_to_nothing() {
        let sheet = sheet(&["book_id", "highlight"], &[]);
        assert!(map_to_books(&sheet).is_empty());
        assert!(map_to_highlights(&sheet).is_empty());
    }

    #[test]
    fn highlight_keeps_extra_columns_verbatim() {
        let sheet = sheet(
            &["Book ID", "Page", "Highlight", "Added On"],
            &[&["1", "42", "Fear is the mind-killer.", "2024-01-01"]],
        );
        let highlights = map_to_highlights(&sheet);
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].highlight, "Fear is the mind-killer.");
        assert_eq!(
            highlights[0].extra,
            vec![
                ("Page".to_string(), "42".to_string()),
                ("Added On".to_string(), "2024-01-01".to_string()),
            ]
        );
    }

    #[test]
    fn drops_highlights_missing_text_or_id() {
        let sheet = sheet(
            &["book_id", "highlight"],
            &[&["1", ""], &["", "orphan"], &["2", "kept"]],
        );
        let highlights = map_to_highlights(&sheet);
        assert_eq!(highlights.len(), 1);
        assert_eq!(highlights[0].book_id, "2");
    }

    #[test]
    fn sheet_without_highlight_column_yields_nothing() {
        let sheet = sheet(&["book_id", "title"], &[&["1", "Dune"]]);
        assert!(map_to_highlights(&sheet).is_empty());
    }

    #[test]
    fn highlight_id_column_does_not_take_the_join_key() {
        let sheet = sheet(
            &["highlight_id", "book_id", "highlight"],
            &[&["h-17", "1", "Fear is the mind-killer."]],
        );
        let highlights = map_to_highlights(&sheet);
        assert_eq!(highlights[0].book_id, "1");
        assert_eq!(
            highlights[0].extra,
            vec![("highlight_id".to_string(), "h-17".to_string())]
        );
    }
}
