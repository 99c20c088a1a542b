//! Fetching sheets of a public spreadsheet as CSV.
//!
//! # Overview
//!
//! A [`SheetSource`] turns a [`SheetSpec`] into CSV text or a
//! [`FetchError`]. [`fetch_sheet`] runs one source call plus parsing and
//! never fails: errors are folded into the returned [`RawSheet`].
//! [`fetch_all`] fans out one task per sheet and collects the results in
//! configured order once every task has finished.
//!
//! [`SheetsClient`] is the HTTP source for Google Sheets CSV exports.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use highlights_fetch::{ClientOptions, SheetsClient, load_sheets};
//! use highlights_model::SheetSpec;
//!
//! async fn load() -> highlights_fetch::LoadResult<()> {
//!     let client = SheetsClient::new("spreadsheet-id", ClientOptions::default())?;
//!     let specs = vec![SheetSpec::new("0", "Books"), SheetSpec::new("1", "Highlights")];
//!     for sheet in load_sheets(Arc::new(client), &specs).await? {
//!         println!("{}: {} rows", sheet.sheet_name, sheet.rows.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`SheetSpec`]: highlights_model::SheetSpec
//! [`RawSheet`]: highlights_model::RawSheet

#![deny(unsafe_code)]

pub mod client;
pub mod error;
pub mod fetch;
pub mod source;

pub use client::{ClientOptions, DEFAULT_BASE_URL, SheetsClient};
pub use error::{FetchError, LoadError, LoadResult, Result};
pub use fetch::{fetch_all, fetch_sheet, load_sheets};
pub use source::SheetSource;
