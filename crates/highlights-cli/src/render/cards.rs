//! Catalog cards and the single-book detail panel.

use comfy_table::{Attribute, Cell, Table};

use highlights_map::Collection;
use highlights_model::{Book, Highlight};

use super::cell::CellKind;
use super::notice::{sheet_errors_or, with_sheet_errors};
use super::style::{apply_table_style, dim_cell, header_cell};

const NO_BOOKS: &str = "No books found.";
const BOOK_NOT_FOUND: &str = "Book not found";
const NO_HIGHLIGHTS: &str = "No highlights for this book.";

fn display_title(book: &Book) -> &str {
    if book.title.is_empty() {
        "(untitled)"
    } else {
        &book.title
    }
}

fn book_fields(book: &Book) -> [(&'static str, &str); 5] {
    [
        ("Author", book.author.as_str()),
        ("Genre", book.genre.as_str()),
        ("Year", book.publication_year.as_str()),
        ("Cover", book.cover_image.as_str()),
        ("Goodreads", book.goodreads_link.as_str()),
    ]
}

fn book_card(book: &Book, highlight_count: usize) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(display_title(book)),
        dim_cell(format!("#{}", book.book_id)),
    ]);
    apply_table_style(&mut table);
    for (label, value) in book_fields(book) {
        if value.is_empty() {
            continue;
        }
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            CellKind::for_header(label).cell(value),
        ]);
    }
    table.add_row(vec![
        Cell::new("Highlights").add_attribute(Attribute::Bold),
        Cell::new(highlight_count),
    ]);
    table
}

/// One card per book, in collection order, below any failed-sheet errors.
pub fn render_books(collection: &Collection) -> String {
    if collection.books.is_empty() {
        return sheet_errors_or(collection, NO_BOOKS);
    }
    let cards = collection
        .books
        .iter()
        .map(|book| {
            book_card(book, collection.highlights_for(&book.book_id).len()).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");
    with_sheet_errors(collection, cards)
}

fn book_lines(book: &Book) -> Vec<String> {
    let mut lines = vec![display_title(book).to_string()];
    lines.extend(
        book_fields(book)
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(label, value)| {
                format!("  {label}: {}", CellKind::for_header(label).display(value))
            }),
    );
    lines
}

fn highlight_lines(highlights: &[Highlight]) -> Vec<String> {
    if highlights.is_empty() {
        return vec![NO_HIGHLIGHTS.to_string()];
    }
    let mut lines = vec![format!("Highlights ({}):", highlights.len())];
    for (n, highlight) in highlights.iter().enumerate() {
        lines.push(format!(
            "  {}. {}",
            n + 1,
            CellKind::Quote.display(&highlight.highlight)
        ));
        lines.extend(
            highlight
                .extra
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(header, value)| format!("     {header}: {value}")),
        );
    }
    lines
}

/// Plain-text panel with a book's fields and its highlights in source order.
pub fn render_detail(collection: &Collection, book_id: &str) -> String {
    let mut lines = match collection.book(book_id) {
        Some(book) => book_lines(book),
        None => vec![format!("{BOOK_NOT_FOUND}: {book_id}")],
    };
    lines.push(String::new());
    lines.extend(highlight_lines(collection.highlights_for(book_id)));
    with_sheet_errors(collection, lines.join("\n"))
}
