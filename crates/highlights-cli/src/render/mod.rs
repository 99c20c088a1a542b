//! Terminal and JSON views of a loaded collection.
//!
//! Every view is a pure function from the committed [`Collection`] to a
//! string, so the binary only decides where it goes.
//!
//! [`Collection`]: highlights_map::Collection

mod cards;
mod cell;
mod json;
mod notice;
mod style;
mod tables;

pub use cards::{render_books, render_detail};
pub use cell::CellKind;
pub use json::{books_json, detail_json, list_json, sheets_json};
pub use style::{apply_table_style, dim_cell, header_cell};
pub use tables::{EMPTY_LIST_MESSAGE, list_table, render_list, render_sheets, sheet_table};
