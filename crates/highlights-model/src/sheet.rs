//! Sheet identifiers and parsed sheet tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What a sheet contributes to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetRole {
    /// One row per book.
    Books,
    /// One row per highlight, joined to books by `book_id`.
    Highlights,
    /// Book columns repeated on every highlight row.
    Combined,
    /// Shown in the generic sheet view only.
    Other,
}

impl SheetRole {
    /// Infers a role from a human-readable sheet name.
    #[must_use]
    pub fn infer(name: &str) -> Self {
        let lower = name.to_lowercase();
        let book = lower.contains("book");
        let highlight = lower.contains("highlight");
        match (book, highlight) {
            (true, true) => Self::Combined,
            (false, true) => Self::Highlights,
            (true, false) => Self::Books,
            (false, false) => Self::Other,
        }
    }

    /// True if book records should be mapped from this sheet.
    #[must_use]
    pub const fn has_books(self) -> bool {
        matches!(self, Self::Books | Self::Combined)
    }

    /// True if highlight records should be mapped from this sheet.
    #[must_use]
    pub const fn has_highlights(self) -> bool {
        matches!(self, Self::Highlights | Self::Combined)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Highlights => "highlights",
            Self::Combined => "combined",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for SheetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A configured sheet: opaque id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSpec {
    pub id: String,
    pub name: String,
    pub role: SheetRole,
}

impl SheetSpec {
    /// Creates a spec whose role is inferred from `name`.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let role = SheetRole::infer(&name);
        Self {
            id: id.into(),
            name,
            role,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: SheetRole) -> Self {
        self.role = role;
        self
    }
}

/// The parsed-but-unmapped result of one sheet fetch.
///
/// Every row has exactly `headers.len()` cells. A failed fetch carries an
/// `error` and no headers or rows; an empty sheet carries neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSheet {
    pub sheet_id: String,
    pub sheet_name: String,
    pub role: SheetRole,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RawSheet {
    /// Builds a successfully parsed sheet.
    pub fn parsed(spec: &SheetSpec, headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            sheet_id: spec.id.clone(),
            sheet_name: spec.name.clone(),
            role: spec.role,
            headers,
            rows,
            error: None,
        }
    }

    /// Builds a failed sheet with no data.
    pub fn failed(spec: &SheetSpec, error: impl Into<String>) -> Self {
        Self {
            sheet_id: spec.id.clone(),
            sheet_name: spec.name.clone(),
            role: spec.role,
            headers: Vec::new(),
            rows: Vec::new(),
            error: Some(error.into()),
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    /// True when the sheet has no data rows (failed or not).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
