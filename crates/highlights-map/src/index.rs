//! Joining highlights to books by `book_id`.

use std::collections::BTreeMap;

use highlights_model::Highlight;

/// Highlights grouped by `book_id`, each group in source order.
///
/// Keys are compared exactly: no case folding or trimming, so ids that
/// differ only in case between sheets never join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookHighlightsIndex {
    by_book: BTreeMap<String, Vec<Highlight>>,
}

impl BookHighlightsIndex {
    /// Builds the index from scratch.
    pub fn build(highlights: &[Highlight]) -> Self {
        let mut by_book: BTreeMap<String, Vec<Highlight>> = BTreeMap::new();
        for highlight in highlights {
            by_book
                .entry(highlight.book_id.clone())
                .or_default()
                .push(highlight.clone());
        }
        Self { by_book }
    }

    /// Highlights for `book_id`; empty when the book has none.
    #[must_use]
    pub fn lookup(&self, book_id: &str) -> &[Highlight] {
        self.by_book
            .get(book_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Groups highlights by `book_id`.
pub fn index_highlights_by_book(highlights: &[Highlight]) -> BookHighlightsIndex {
    BookHighlightsIndex::build(highlights)
}

/// Highlights for `book_id` in `index`; never fails.
pub fn lookup<'a>(index: &'a BookHighlightsIndex, book_id: &str) -> &'a [Highlight] {
    index.lookup(book_id)
}
