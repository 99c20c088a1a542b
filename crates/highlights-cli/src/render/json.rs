//! JSON payloads for `--format json`.

use serde::Serialize;

use highlights_map::Collection;
use highlights_model::{Book, Highlight, RawSheet};

#[derive(Serialize)]
struct ListEntry<'a> {
    book: Option<&'a Book>,
    highlight: &'a Highlight,
}

#[derive(Serialize)]
struct BookCard<'a> {
    #[serde(flatten)]
    book: &'a Book,
    highlight_count: usize,
}

#[derive(Serialize)]
struct BookDetail<'a> {
    book_id: &'a str,
    book: Option<&'a Book>,
    highlights: &'a [Highlight],
}

/// Joined highlights, one object per highlight.
pub fn list_json(collection: &Collection) -> serde_json::Result<String> {
    let entries: Vec<ListEntry<'_>> = collection
        .joined()
        .map(|(book, highlight)| ListEntry { book, highlight })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Raw sheets, failed ones included with their `error`.
pub fn sheets_json(sheets: &[RawSheet]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(sheets)
}

pub fn books_json(collection: &Collection) -> serde_json::Result<String> {
    let cards: Vec<BookCard<'_>> = collection
        .books
        .iter()
        .map(|book| BookCard {
            book,
            highlight_count: collection.highlights_for(&book.book_id).len(),
        })
        .collect();
    serde_json::to_string_pretty(&cards)
}

/// One book (or `null`) and its highlights.
pub fn detail_json(collection: &Collection, book_id: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&BookDetail {
        book_id,
        book: collection.book(book_id),
        highlights: collection.highlights_for(book_id),
    })
}
