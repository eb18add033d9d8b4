//! CSV reading for response imports
//!
//! Turns raw CSV text into rows keyed by header name. Every record must have
//! the same number of fields as the header; anything else fails the whole
//! file.

use std::collections::HashMap;

use csv::{ReaderBuilder, StringRecord};
use survey_core::DomainError;

/// UTF-8 byte order mark some spreadsheet tools prepend
const UTF8_BOM: char = '\u{feff}';

/// A single data row keyed by column header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    fields: HashMap<String, String>,
}

impl CsvRow {
    fn from_record(headers: &StringRecord, record: &StringRecord) -> Self {
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        Self { fields }
    }

    /// Get the raw value of a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn malformed(err: csv::Error) -> DomainError {
    DomainError::MalformedCsv(err.to_string())
}

/// Parse CSV text into header-keyed rows, in file order
///
/// # Errors
/// Returns `DomainError::MalformedCsv` when the text is not well-formed CSV
pub fn parse_csv(text: &str) -> Result<Vec<CsvRow>, DomainError> {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(malformed)?.clone();

    reader
        .records()
        .map(|record| {
            let record = record.map_err(malformed)?;
            Ok(CsvRow::from_record(&headers, &record))
        })
        .collect()
}
