//! Mapping parsed sheets onto books and highlights.
//!
//! Sheet schemas differ between spreadsheets, so columns are bound to
//! fields by case-insensitive keyword rules evaluated in a fixed priority
//! order (see [`rules`]). Rows missing a required field are dropped
//! silently. Highlights are joined to books by exact `book_id` equality.

#![deny(unsafe_code)]

pub mod collection;
pub mod entities;
pub mod index;
pub mod rules;

pub use collection::Collection;
pub use entities::{map_to_books, map_to_highlights};
pub use index::{BookHighlightsIndex, index_highlights_by_book, lookup};
pub use rules::{
    BOOK_RULES, BookField, ColumnBinding, FieldRule, HIGHLIGHT_RULES, HighlightField,
    bind_columns, match_header,
};
