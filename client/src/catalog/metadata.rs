//! Parsing and field validation for the filename-keyed metadata source.

use std::collections::BTreeMap;

use super::{CatalogError, ImageMetadata};

#[cfg(test)]
#[path = "metadata_test.rs"]
mod metadata_test;

/// Filename (`"3.jpg"`) to metadata mapping, as loaded from `artwork.json`.
pub type MetadataSource = BTreeMap<String, ImageMetadata>;

/// Parse the metadata JSON object.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] when the document is not an object of
/// metadata records or a record lacks a required field.
pub fn parse_metadata(raw: &str) -> Result<MetadataSource, CatalogError> {
    serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))
}

/// Parse a year string, accepting exactly four ASCII digits and nothing else.
///
/// Fixed width keeps numeric and lexical ordering identical, so the stored
/// string sorts the same way as the parsed value.
pub(crate) fn parse_year(key: &str, raw: &str) -> Result<u16, CatalogError> {
    let invalid = || CatalogError::InvalidYear { key: key.to_owned(), year: raw.to_owned() };
    if raw.len() != 4 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u16>().map_err(|_| invalid())
}
