//! Conversion configuration.
//!
//! The website build always reads and writes the same two asset files, so the
//! defaults are plain constants. [`ConvertOptions`] carries them into
//! [`crate::convert_with`] so nothing below the binary reads globals.

use std::path::PathBuf;

use crate::models::{BUILD_TYPE, DOWNLOAD_LINKS};

/// CSV exported from the ROM spreadsheet.
pub const DEFAULT_INPUT_PATH: &str = "/home/ubuntu/rom-website/src/assets/roms_for_website.csv";

/// Indexed JSON document loaded by the website.
pub const DEFAULT_OUTPUT_PATH: &str = "/home/ubuntu/rom-website/src/assets/roms_data.json";

/// Column delimiter of the input file.
pub const CSV_DELIMITER: u8 = b',';

/// Separator inside multi-valued cells.
pub const LIST_SEPARATOR: char = ',';

/// Columns holding comma-separated lists.
pub const LIST_FIELDS: [&str; 2] = [DOWNLOAD_LINKS, BUILD_TYPE];

/// Options for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// CSV file to read.
    pub input_path: PathBuf,

    /// JSON file to (over)write.
    pub output_path: PathBuf,

    /// Column delimiter byte.
    pub delimiter: u8,

    /// Separator used to split list cells.
    pub list_separator: char,

    /// Columns turned into lists of strings.
    pub list_fields: Vec<String>,
}

impl ConvertOptions {
    /// Options for the given paths, everything else at its default.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: CSV_DELIMITER,
            list_separator: LIST_SEPARATOR,
            list_fields: LIST_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ConvertOptions::default();
        assert_eq!(opts.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(opts.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(opts.delimiter, b',');
        assert_eq!(opts.list_fields, vec!["download_links", "build_type"]);
    }

    #[test]
    fn test_new_keeps_defaults() {
        let opts = ConvertOptions::new("in.csv", "out.json");
        assert_eq!(opts.input_path, PathBuf::from("in.csv"));
        assert_eq!(opts.output_path, PathBuf::from("out.json"));
        assert_eq!(opts.delimiter, CSV_DELIMITER);
        assert_eq!(opts.list_separator, ',');
    }
}
