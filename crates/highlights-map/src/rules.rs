//! Ordered header-to-field rules.
//!
//! A header is lowercased and tested against each rule in order; the first
//! rule with a keyword contained in the header wins. Order matters: cover
//! and link columns are tried before the generic `id` keyword.
//!
//! Within a rule, keywords run from most to least specific. When several
//! columns resolve to one field, the column matched by the more specific
//! keyword binds it.

use std::fmt;

/// Target fields of a [`Book`](highlights_model::Book).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    BookId,
    Title,
    Author,
    Genre,
    PublicationYear,
    CoverImage,
    GoodreadsLink,
}

impl BookField {
    /// Field name as it appears in the record.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BookId => "book_id",
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::PublicationYear => "publication_year",
            Self::CoverImage => "cover_image",
            Self::GoodreadsLink => "goodreads_link",
        }
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed fields of a [`Highlight`](highlights_model::Highlight).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HighlightField {
    BookId,
    Highlight,
}

impl HighlightField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BookId => "book_id",
            Self::Highlight => "highlight",
        }
    }
}

impl fmt::Display for HighlightField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binds headers containing any of `keywords` to `field`.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule<F> {
    pub field: F,
    pub keywords: &'static [&'static str],
}

impl<F> FieldRule<F> {
    /// Index of the first keyword contained in `header`, which must already
    /// be lowercased. Lower is more specific.
    #[must_use]
    pub fn keyword_rank(&self, header: &str) -> Option<usize> {
        self.keywords
            .iter()
            .position(|keyword| header.contains(keyword))
    }
}

/// Book rules in priority order.
pub const BOOK_RULES: &[FieldRule<BookField>] = &[
    FieldRule {
        field: BookField::CoverImage,
        keywords: &["cover", "image"],
    },
    FieldRule {
        field: BookField::GoodreadsLink,
        keywords: &["goodreads", "link"],
    },
    FieldRule {
        field: BookField::BookId,
        keywords: &["book_id", "book id", "id"],
    },
    FieldRule {
        field: BookField::Title,
        keywords: &["title"],
    },
    FieldRule {
        field: BookField::Author,
        keywords: &["author"],
    },
    FieldRule {
        field: BookField::Genre,
        keywords: &["genre"],
    },
    FieldRule {
        field: BookField::PublicationYear,
        keywords: &["year", "publication"],
    },
];

/// Highlight rules in priority order.
pub const HIGHLIGHT_RULES: &[FieldRule<HighlightField>] = &[
    FieldRule {
        field: HighlightField::BookId,
        keywords: &["book_id", "book id", "id"],
    },
    FieldRule {
        field: HighlightField::Highlight,
        keywords: &["highlight", "quote"],
    },
];

/// Returns the field of the first rule matching `header`, ignoring case.
pub fn match_header<F: Copy>(rules: &[FieldRule<F>], header: &str) -> Option<F> {
    ranked_match(rules, header).map(|(field, _)| field)
}

fn ranked_match<F: Copy>(rules: &[FieldRule<F>], header: &str) -> Option<(F, usize)> {
    let lower = header.to_lowercase();
    rules
        .iter()
        .find_map(|rule| rule.keyword_rank(&lower).map(|rank| (rule.field, rank)))
}

/// Column positions resolved against a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnBinding<F> {
    /// `(column index, field)` in column order.
    pub bound: Vec<(usize, F)>,
    /// Columns that matched no rule, or lost their field to another column.
    pub unbound: Vec<usize>,
}

impl<F: Copy + PartialEq> ColumnBinding<F> {
    /// Column index bound to `field`, if any.
    #[must_use]
    pub fn column_of(&self, field: F) -> Option<usize> {
        self.bound
            .iter()
            .find(|(_, bound)| *bound == field)
            .map(|(idx, _)| *idx)
    }
}

/// Resolves every header against `rules`.
///
/// When several headers match the same field, the one matched by the most
/// specific keyword wins, then the leftmost. The others are unbound.
pub fn bind_columns<F: Copy + PartialEq>(
    rules: &[FieldRule<F>],
    headers: &[String],
) -> ColumnBinding<F> {
    let matches: Vec<Option<(F, usize)>> =
        headers.iter().map(|h| ranked_match(rules, h)).collect();

    let wins = |idx: usize, field: F, rank: usize| {
        matches.iter().enumerate().all(|(other, m)| match m {
            Some((f, r)) if *f == field && other != idx => (rank, idx) < (*r, other),
            _ => true,
        })
    };

    let mut bound = Vec::new();
    let mut unbound = Vec::new();
    for (idx, m) in matches.iter().enumerate() {
        match *m {
            Some((field, rank)) if wins(idx, field, rank) => bound.push((idx, field)),
            _ => unbound.push(idx),
        }
    }
    ColumnBinding { bound, unbound }
}
