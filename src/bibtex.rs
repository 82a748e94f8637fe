//! Line-oriented BibTeX reader: the record provider behind the benchmarks.
//!
//! The reader is deliberately forgiving. An entry opens at a line starting
//! with `@` (entry type and citation key are not retained), closes at a line
//! starting with `}`, and any interior `key = value` line becomes a field
//! after comma/brace/quote stripping. Lines that do not look like fields are
//! ignored, and an entry left open at end of input is dropped. Downstream
//! analysis treats the records as opaque field maps.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::data::BibRecord;
use crate::errors::BenchError;
use crate::utils::normalize_inline_whitespace;

/// Read every record from a BibTeX file.
///
/// The path is an explicit argument; the reader owns no default location.
pub fn read_bib_file(path: &Path) -> Result<Vec<BibRecord>, BenchError> {
    let file = File::open(path)?;
    let records = read_bib(BufReader::new(file))?;
    debug!(path = %path.display(), records = records.len(), "bibtex file loaded");
    Ok(records)
}

/// Read records from any buffered source.
pub fn read_bib<R: BufRead>(reader: R) -> Result<Vec<BibRecord>, BenchError> {
    let mut records = Vec::new();
    let mut current: Option<BibRecord> = None;

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.starts_with('@') {
            // A header replaces any unterminated predecessor.
            current = Some(BibRecord::new());
        } else if trimmed.starts_with('}') {
            if let Some(record) = current.take() {
                if !record.is_empty() {
                    records.push(record);
                }
            }
        } else if let Some(record) = current.as_mut() {
            if let Some((key, value)) = parse_field_line(trimmed) {
                record.insert(key, value);
            }
        }
    }
    Ok(records)
}

fn parse_field_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    let value = value
        .trim()
        .trim_end_matches(',')
        .trim_matches(|c| matches!(c, '{' | '}' | '"'));
    let value = normalize_inline_whitespace(value);
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}
