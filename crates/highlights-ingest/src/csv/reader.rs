//! Loading a CSV export from disk.

use std::path::Path;

use highlights_model::{RawSheet, SheetSpec};

use crate::error::{IngestError, Result};

use super::sheet::parse_sheet;

/// Reads a local CSV export and parses it as the sheet described by `spec`.
///
/// UTF-16 exports are rejected; a UTF-8 BOM is accepted.
pub fn read_sheet_file(path: &Path, spec: &SheetSpec) -> Result<RawSheet> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let text = String::from_utf8(bytes).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
    })?;

    let parsed = parse_sheet(&text);
    tracing::debug!(
        path = %path.display(),
        sheet = %spec.name,
        rows = parsed.rows.len(),
        "loaded sheet from file"
    );
    Ok(RawSheet::parsed(spec, parsed.headers, parsed.rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_sheet_file_with_bom() {
        let file = create_temp_csv("\u{feff}book_id,title\n1,Dune\n".as_bytes());
        let spec = SheetSpec::new("local", "Books");
        let sheet = read_sheet_file(file.path(), &spec).unwrap();

        assert_eq!(sheet.headers, vec!["book_id", "title"]);
        assert_eq!(sheet.rows.len(), 1);
        assert_eq!(sheet.sheet_name, "Books");
        assert!(sheet.error.is_none());
    }

    #[test]
    fn test_read_sheet_file_missing() {
        let spec = SheetSpec::new("local", "Books");
        let result = read_sheet_file(Path::new("/nonexistent/books.csv"), &spec);
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_sheet_file_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'a', 0x00]);
        let spec = SheetSpec::new("local", "Books");
        let result = read_sheet_file(file.path(), &spec);
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }
}
