//! CSV ingestion for the book highlights collection.
//!
//! Sheets arrive as CSV text exported from a spreadsheet. This crate turns
//! that text into header-aligned string tables.
//!
//! # Features
//!
//! - **Line tokenizing**: quoted fields, embedded commas, `""` escapes
//! - **Sheet parsing**: header row detection, blank header/row dropping,
//!   row padding and truncation to header width
//! - **File loading**: read a local CSV export into a [`RawSheet`]
//!
//! # Example
//!
//! ```
//! use highlights_ingest::parse_sheet;
//!
//! let parsed = parse_sheet("book_id,title\n1,Dune\n");
//! assert_eq!(parsed.headers, vec!["book_id", "title"]);
//! assert_eq!(parsed.rows, vec![vec!["1", "Dune"]]);
//! ```
//!
//! [`RawSheet`]: highlights_model::RawSheet

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Parsing ===
pub use csv::{ParsedSheet, clean_value, parse_csv_line, parse_sheet, read_sheet_file};
