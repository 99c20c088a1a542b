//! Data model for the book highlights collection.
//!
//! Sheets are fetched as CSV and kept as [`RawSheet`] tables. Books and
//! highlights are derived from those tables and never mutated on their own.

#![deny(unsafe_code)]

pub mod entity;
pub mod sheet;
pub mod state;

pub use entity::{Book, Highlight};
pub use sheet::{RawSheet, SheetRole, SheetSpec};
pub use state::LoadState;
