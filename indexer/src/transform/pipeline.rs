//! High-level conversion API.
//!
//! Combines all steps: parsing, list splitting, indexing and writing.
//!
//! # Example
//!
//! ```rust,ignore
//! use rom_indexer::convert;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = convert("roms_for_website.csv", "roms_data.json")?;
//!     println!("{}", dataset.summary());
//!     Ok(())
//! }
//! ```

use std::path::Path;

use crate::config::ConvertOptions;
use crate::error::{ConversionError, ConversionResult};
use crate::logs::{log_error, log_info, log_info_indent, log_success, log_warning};
use crate::models::{Dataset, IndexKind, Record};
use crate::output::write_dataset;
use crate::parser::parse_csv_file;

use super::fields::expand_list_fields;
use super::indexer::build_dataset;

/// Convert the CSV at `input_path` into the indexed JSON document at `output_path`.
///
/// Uses the default delimiter and list columns. The written dataset is
/// returned.
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_path: Q) -> ConversionResult<Dataset> {
    convert_with(&ConvertOptions::new(input_path.as_ref(), output_path.as_ref()))
}

/// Convert using explicit options.
///
/// 1. Reads every CSV row into a record
/// 2. Splits the list columns
/// 3. Builds the name, Android version and build type indexes
/// 4. Writes the document, overwriting the output file
pub fn convert_with(options: &ConvertOptions) -> ConversionResult<Dataset> {
    log_info(format!("📖 Reading CSV file: {}", options.input_path.display()));
    let parsed = parse_csv_file(&options.input_path, options.delimiter).map_err(|e| {
        log_error("Could not read the input CSV");
        ConversionError::input(&options.input_path, e)
    })?;

    log_success(format!("Read {} rows, {} columns", parsed.records.len(), parsed.headers.len()));
    if parsed.records.is_empty() {
        log_warning("No data rows found, writing an empty catalog");
    }
    if parsed.ragged_rows > 0 {
        log_warning(format!(
            "{} rows have a different number of cells than the header",
            parsed.ragged_rows
        ));
    }

    let dataset = transform_records(parsed.records, options);

    log_info(format!("💾 Writing JSON: {}", options.output_path.display()));
    write_dataset(&dataset, &options.output_path).map_err(|e| {
        log_error("Could not write the JSON document");
        e
    })?;
    log_success("Document written");

    Ok(dataset)
}

/// Split list columns and index already-parsed records.
pub fn transform_records(mut records: Vec<Record>, options: &ConvertOptions) -> Dataset {
    log_info(format!("✂️  Splitting list columns: {}", options.list_fields.join(", ")));
    expand_list_fields(&mut records, options.list_fields.as_slice(), options.list_separator);

    log_info("📦 Building indexes...");
    let dataset = build_dataset(records);
    for kind in IndexKind::ALL {
        log_info_indent(
            format!("{}: {} keys", kind.document_key(), dataset.index(kind).len()),
            1,
        );
    }

    dataset
}
