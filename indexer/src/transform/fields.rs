//! Multi-valued cells.
//!
//! `download_links` and `build_type` arrive as single cells such as
//! `"http://a, http://b"`. They are replaced by the list of trimmed,
//! non-empty pieces. Empty or absent cells are left as they are.

use crate::models::{FieldValue, Record};

/// Split `raw` on `separator`, trimming pieces and dropping empty ones.
pub fn split_list(raw: &str, separator: char) -> Vec<String> {
    raw.split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Turn one non-empty text column into a list. Returns whether it changed.
pub fn expand_list_field(record: &mut Record, column: &str, separator: char) -> bool {
    let items = match record.get(column) {
        Some(FieldValue::Text(raw)) if !raw.is_empty() => split_list(raw, separator),
        _ => return false,
    };
    record.insert(column, items);
    true
}

/// Apply [`expand_list_field`] to every listed column of every record.
pub fn expand_list_fields<S: AsRef<str>>(records: &mut [Record], columns: &[S], separator: char) {
    for record in records.iter_mut() {
        for column in columns {
            expand_list_field(record, column.as_ref(), separator);
        }
    }
}
