//! Sheet-to-collection mapping across heterogeneous sheets.

use highlights_map::{Collection, map_to_books, map_to_highlights};
use highlights_model::{RawSheet, SheetRole, SheetSpec};

fn sheet(spec: SheetSpec, headers: &[&str], rows: &[&[&str]]) -> RawSheet {
    RawSheet::parsed(
        &spec,
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    )
}

#[test]
fn quoted_scenario_maps_to_one_book() {
    let spec = SheetSpec::new("0", "Books");
    let sheet = sheet(
        spec,
        &["book_id", "title", "author"],
        &[&["1", "Dune, Part One", "Herbert"], &["", "Untitled", "Unknown"]],
    );

    let books = map_to_books(&sheet);

    assert_eq!(books.len(), 1);
    assert_eq!(books[0].book_id, "1");
    assert_eq!(books[0].title, "Dune, Part One");
    assert_eq!(books[0].author, "Herbert");
}

#[test]
fn separate_books_and_highlights_sheets_join() {
    let books = sheet(
        SheetSpec::new("0", "Books"),
        &["Book ID", "Title", "Author", "Genre", "Year", "Cover", "Goodreads Link"],
        &[
            &["1", "Dune", "Frank Herbert", "SF", "1965", "https://img/1.jpg", "https://gr/1"],
            &["2", "Emma", "Jane Austen", "Classic", "1815", "", ""],
        ],
    );
    let highlights = sheet(
        SheetSpec::new("1", "Highlights"),
        &["Book ID", "Highlight", "Page"],
        &[
            &["1", "Fear is the mind-killer.", "8"],
            &["3", "Unknown book", "1"],
            &["1", "The spice must flow.", "12"],
        ],
    );

    let collection = Collection::from_sheets(vec![books, highlights]);

    assert_eq!(collection.books.len(), 2);
    assert_eq!(collection.highlights.len(), 3);
    let dune: Vec<&str> = collection
        .highlights_for("1")
        .iter()
        .map(|h| h.highlight.as_str())
        .collect();
    assert_eq!(dune, vec!["Fear is the mind-killer.", "The spice must flow."]);
    assert!(collection.highlights_for("2").is_empty());

    let joined: Vec<Option<&str>> = collection
        .joined()
        .map(|(book, _)| book.map(|b| b.title.as_str()))
        .collect();
    assert_eq!(joined, vec![Some("Dune"), None, Some("Dune")]);
}

#[test]
fn combined_sheet_deduplicates_books() {
    let spec = SheetSpec::new("0", "Book Highlights");
    assert_eq!(spec.role, SheetRole::Combined);
    let combined = sheet(
        spec,
        &[
            "book_id",
            "title",
            "author",
            "genre",
            "publication_year",
            "cover_image",
            "goodreads_link",
            "highlight",
        ],
        &[
            &["1", "Dune", "Herbert", "SF", "1965", "", "", "First"],
            &["1", "Dune", "Herbert", "SF", "1965", "", "", "Second"],
            &["2", "Emma", "Austen", "Classic", "1815", "", "", ""],
        ],
    );

    let collection = Collection::from_sheets(vec![combined]);

    assert_eq!(collection.books.len(), 2);
    assert_eq!(collection.highlights.len(), 2);
    assert_eq!(collection.highlights_for("1").len(), 2);
    assert_eq!(
        collection.highlights[0].extra("title"),
        Some("Dune"),
        "book columns ride along as extras"
    );
}

#[test]
fn other_sheets_contribute_no_records() {
    let other = sheet(
        SheetSpec::new("9", "Notes").with_role(SheetRole::Other),
        &["book_id", "highlight"],
        &[&["1", "x"]],
    );
    let collection = Collection::from_sheets(vec![other]);

    assert!(collection.books.is_empty());
    assert!(collection.highlights.is_empty());
    assert_eq!(collection.sheets[0].rows.len(), 1);
}

#[test]
fn failed_sheet_is_kept_alongside_good_one() {
    let good = sheet(SheetSpec::new("0", "Books"), &["book_id"], &[&["1"]]);
    let bad = RawSheet::failed(&SheetSpec::new("1", "Highlights"), "Highlights: HTTP 500");

    let collection = Collection::from_sheets(vec![good, bad]);

    assert_eq!(collection.books.len(), 1);
    let failed: Vec<&str> = collection
        .failed_sheets()
        .map(|s| s.sheet_name.as_str())
        .collect();
    assert_eq!(failed, vec!["Highlights"]);
}

#[test]
fn unknown_id_case_mismatch_yields_no_highlights() {
    let books = sheet(SheetSpec::new("0", "Books"), &["book_id"], &[&["ABC"]]);
    let highlights = sheet(
        SheetSpec::new("1", "Highlights"),
        &["book_id", "quote"],
        &[&["abc", "lowercase id"]],
    );
    let collection = Collection::from_sheets(vec![books, highlights]);

    assert!(collection.highlights_for("ABC").is_empty());
    assert_eq!(map_to_highlights(&collection.sheets[1]).len(), 1);
}
