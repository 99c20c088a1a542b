//! Per-cell rendering chosen from the column header.

use comfy_table::{Attribute, Cell, Color};

/// How a cell value is presented, keyed by its header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Cover image URL.
    Image,
    /// Hyperlink.
    Link,
    /// Highlighted passage, shown in quotes.
    Quote,
    Text,
}

impl CellKind {
    /// Picks a kind by case-insensitive substring; the first match wins.
    #[must_use]
    pub fn for_header(header: &str) -> Self {
        let lower = header.to_lowercase();
        if lower.contains("cover") {
            Self::Image
        } else if lower.contains("link") || lower.contains("goodreads") {
            Self::Link
        } else if lower.contains("highlight") || lower.contains("quote") {
            Self::Quote
        } else {
            Self::Text
        }
    }

    /// Plain-text form of `value`. Empty values stay empty.
    #[must_use]
    pub fn display(self, value: &str) -> String {
        if value.is_empty() {
            return String::new();
        }
        match self {
            Self::Image => format!("[image] {value}"),
            Self::Quote => format!("\"{value}\""),
            Self::Link | Self::Text => value.to_string(),
        }
    }

    /// Styled table cell for `value`.
    #[must_use]
    pub fn cell(self, value: &str) -> Cell {
        let cell = Cell::new(self.display(value));
        match self {
            Self::Image => cell.fg(Color::DarkGrey),
            Self::Link => cell.fg(Color::Blue).add_attribute(Attribute::Underlined),
            Self::Quote => cell.add_attribute(Attribute::Italic),
            Self::Text => cell,
        }
    }
}
