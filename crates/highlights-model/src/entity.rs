//! Typed records mapped from sheet rows.
//!
//! All values stay raw strings; nothing is parsed as a number or date.

use serde::{Deserialize, Serialize};

/// A book row. Kept only when `book_id` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: String,
    pub cover_image: String,
    pub goodreads_link: String,
}

/// A highlight row. Kept only when `book_id` and `highlight` are non-empty.
///
/// Columns that match no highlight field are carried in `extra` under their
/// original header, in sheet column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub book_id: String,
    pub highlight: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl Highlight {
    /// Looks up an extra column by its original header.
    #[must_use]
    pub fn extra(&self, header: &str) -> Option<&str> {
        self.extra
            .iter()
            .find(|(key, _)| key == header)
            .map(|(_, value)| value.as_str())
    }
}
