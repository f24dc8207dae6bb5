//! CSV to record parser.
//!
//! Reads a header row and turns every data row into a [`Record`] keyed by
//! header. The reader is lenient about row length: missing trailing cells
//! become empty strings and surplus cells are dropped. No ROM-specific logic
//! here.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CsvResult;
use crate::models::Record;

const UTF8_BOM: char = '\u{feff}';

/// Result of parsing with metadata
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// One record per data row, in input order
    pub records: Vec<Record>,
    /// Column headers
    pub headers: Vec<String>,
    /// Rows whose cell count differs from the header
    pub ragged_rows: usize,
}

/// Parse CSV text with the default `,` delimiter.
///
/// # Example
/// ```ignore
/// use rom_indexer::csv_to_records;
///
/// let rows = csv_to_records("rom_name,android_version\nLineageOS,14").unwrap();
/// assert_eq!(rows[0].text("rom_name"), Some("LineageOS"));
/// ```
pub fn csv_to_records(csv: &str) -> CsvResult<Vec<Record>> {
    parse_csv(csv.as_bytes(), b',').map(|result| result.records)
}

/// Parse CSV from a reader into records.
pub fn parse_csv<R: Read>(reader: R, delimiter: u8) -> CsvResult<ParseResult> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| if i == 0 { h.trim_start_matches(UTF8_BOM) } else { h })
        .map(String::from)
        .collect();

    let mut records = Vec::new();
    let mut ragged_rows = 0;

    for row in csv_reader.records() {
        let row = row?;
        if row.len() != headers.len() {
            ragged_rows += 1;
        }

        let mut record = Record::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            record.insert(header.as_str(), row.get(i).unwrap_or(""));
        }
        records.push(record);
    }

    Ok(ParseResult {
        records,
        headers,
        ragged_rows,
    })
}

/// Parse a CSV file. The file handle is closed when parsing returns.
pub fn parse_csv_file<P: AsRef<Path>>(path: P, delimiter: u8) -> CsvResult<ParseResult> {
    let file = File::open(path.as_ref())?;
    parse_csv(file, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;
    use crate::models::FieldValue;
    use std::io::Write;

    #[test]
    fn test_simple_csv() {
        let csv = "rom_name,android_version\nLineageOS,14\ncrDroid,13";
        let rows = csv_to_records(csv).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text("rom_name"), Some("LineageOS"));
        assert_eq!(rows[0].text("android_version"), Some("14"));
        assert_eq!(rows[1].text("rom_name"), Some("crDroid"));
    }

    #[test]
    fn test_quoted_cell_keeps_commas() {
        let csv = "rom_name,download_links\nLineageOS,\"http://a, http://b\"";
        let rows = csv_to_records(csv).unwrap();

        assert_eq!(
            rows[0].get("download_links"),
            Some(&FieldValue::from("http://a, http://b"))
        );
    }

    #[test]
    fn test_missing_trailing_cells_are_empty() {
        let result = parse_csv("a,b,c\n1".as_bytes(), b',').unwrap();
        let row = &result.records[0];

        assert_eq!(row.text("a"), Some("1"));
        assert_eq!(row.get("b"), Some(&FieldValue::from("")));
        assert_eq!(row.get("c"), Some(&FieldValue::from("")));
        assert_eq!(result.ragged_rows, 1);
    }

    #[test]
    fn test_extra_cells_ignored() {
        let result = parse_csv("a,b\n1,2,3,4".as_bytes(), b',').unwrap();
        let row = &result.records[0];

        assert_eq!(serde_json::to_value(row).unwrap(), serde_json::json!({"a": "1", "b": "2"}));
        assert_eq!(result.ragged_rows, 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = csv_to_records("a,b\n1,2\n\n3,4\n").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_values_not_trimmed() {
        let rows = csv_to_records("rom_name,notes\n LineageOS , x").unwrap();
        assert_eq!(rows[0].text("rom_name"), Some(" LineageOS "));
    }

    #[test]
    fn test_header_only_has_no_records() {
        let result = parse_csv("rom_name,android_version\n".as_bytes(), b',').unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.headers, vec!["rom_name", "android_version"]);
    }

    #[test]
    fn test_empty_input_has_no_records() {
        let result = parse_csv("".as_bytes(), b',').unwrap();
        assert!(result.records.is_empty());
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let rows = csv_to_records("\u{feff}rom_name,android_version\nPixelOS,14").unwrap();
        assert_eq!(rows[0].text("rom_name"), Some("PixelOS"));
    }

    #[test]
    fn test_non_ascii_preserved() {
        let rows = csv_to_records("rom_name,maintainer\nLineageOS,Jörg 林").unwrap();
        assert_eq!(rows[0].text("maintainer"), Some("Jörg 林"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let result = parse_csv("a;b\n1;2".as_bytes(), b';').unwrap();
        assert_eq!(result.records[0].text("b"), Some("2"));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let bytes: &[u8] = &[b'a', b'\n', 0xFF, 0xFE, b'\n'];
        let err = parse_csv(bytes, b',').unwrap_err();
        assert!(matches!(err, CsvError::ParseError { .. }));
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "rom_name,android_version\nEvolution X,14\n").unwrap();

        let result = parse_csv_file(file.path(), b',').unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].text("rom_name"), Some("Evolution X"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_csv_file(dir.path().join("absent.csv"), b',').unwrap_err();
        assert!(matches!(err, CsvError::IoError(_)));
    }
}
