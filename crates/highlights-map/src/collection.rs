//! The committed result of one load cycle.

use std::collections::BTreeSet;

use highlights_model::{Book, Highlight, RawSheet};

use crate::entities::{map_to_books, map_to_highlights};
use crate::index::BookHighlightsIndex;

/// Sheets plus everything derived from them, computed once per cycle.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub sheets: Vec<RawSheet>,
    /// First book per `book_id`, in sheet then row order.
    pub books: Vec<Book>,
    pub highlights: Vec<Highlight>,
    pub index: BookHighlightsIndex,
}

impl Collection {
    /// Maps books and highlights from every sheet according to its role.
    pub fn from_sheets(sheets: Vec<RawSheet>) -> Self {
        let mut books = Vec::new();
        let mut seen = BTreeSet::new();
        let mut highlights = Vec::new();

        for sheet in &sheets {
            if sheet.role.has_books() {
                for book in map_to_books(sheet) {
                    if seen.insert(book.book_id.clone()) {
                        books.push(book);
                    }
                }
            }
            if sheet.role.has_highlights() {
                highlights.extend(map_to_highlights(sheet));
            }
        }

        let index = BookHighlightsIndex::build(&highlights);
        tracing::info!(
            sheets = sheets.len(),
            books = books.len(),
            highlights = highlights.len(),
            "Built collection"
        );

        Self {
            sheets,
            books,
            highlights,
            index,
        }
    }

    /// Finds a book by exact id.
    #[must_use]
    pub fn book(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.book_id == book_id)
    }

    /// Highlights of one book, in source order.
    #[must_use]
    pub fn highlights_for(&self, book_id: &str) -> &[Highlight] {
        self.index.lookup(book_id)
    }

    /// Sheets whose fetch failed.
    pub fn failed_sheets(&self) -> impl Iterator<Item = &RawSheet> {
        self.sheets.iter().filter(|sheet| sheet.is_failed())
    }

    /// Every highlight paired with its book, when the book is known.
    pub fn joined(&self) -> impl Iterator<Item = (Option<&Book>, &Highlight)> {
        self.highlights
            .iter()
            .map(|highlight| (self.book(&highlight.book_id), highlight))
    }
}
