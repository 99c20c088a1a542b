//! CSV reading utilities.

mod line;
mod reader;
mod sheet;

pub use line::parse_csv_line;
pub use reader::read_sheet_file;
pub use sheet::{ParsedSheet, clean_value, parse_sheet};
