//! Field extraction and cleaning: turning borrowed records into datasets.

use crate::constants::fields::YEAR_DIGITS;
use crate::data::{BibRecord, FieldDataset};
use crate::errors::BenchError;
use crate::utils::digits_only;

/// Extract the numeric dataset for a year-like field.
///
/// Raw values are stripped to their digits; only values whose cleaned form is
/// exactly four digits survive. Record order is preserved, so the dataset is
/// in encounter order before any sort runs.
pub fn numeric_field_values(records: &[BibRecord], field: &str) -> Vec<f64> {
    let mut values = Vec::new();
    for record in records {
        let Some(raw) = record.value(field) else {
            continue;
        };
        let cleaned = digits_only(raw);
        if cleaned.len() == YEAR_DIGITS {
            if let Ok(year) = cleaned.parse::<u32>() {
                values.push(f64::from(year));
            }
        }
    }
    values
}

/// Build the dataset for a general-catalogue field.
///
/// Returns `Ok(None)` when no record defines the field non-empty. If every
/// value parses as a number the dataset is numeric; otherwise every value is
/// lower-cased text. A field mixing both kinds is a `MixedFieldTypes` error.
pub fn general_field_dataset(
    records: &[BibRecord],
    field: &str,
) -> Result<Option<FieldDataset>, BenchError> {
    let raw: Vec<&str> = records
        .iter()
        .filter_map(|record| record.value(field))
        .collect();
    if raw.is_empty() {
        return Ok(None);
    }

    let numeric_count = raw.iter().filter(|value| is_numeric(value)).count();
    if numeric_count == raw.len() {
        let values = raw
            .iter()
            .filter_map(|value| value.trim().parse::<f64>().ok())
            .collect();
        return Ok(Some(FieldDataset::Numeric(values)));
    }
    if numeric_count > 0 {
        return Err(BenchError::MixedFieldTypes {
            field: field.to_string(),
        });
    }

    let values = raw.iter().map(|value| value.to_lowercase()).collect();
    Ok(Some(FieldDataset::Text(values)))
}

fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> BibRecord {
        pairs.iter().copied().collect()
    }

    #[test]
    fn year_extraction_keeps_only_four_digit_values() {
        let records = vec![
            record(&[("year", "2020")]),
            record(&[("year", "20x1")]),
            record(&[("year", "1999")]),
        ];
        assert_eq!(
            numeric_field_values(&records, "year"),
            vec![2020.0, 1999.0]
        );
    }

    #[test]
    fn year_extraction_strips_punctuation() {
        let records = vec![
            record(&[("year", "(2021)")]),
            record(&[("year", "c. 845")]),
            record(&[("year", "19999")]),
        ];
        assert_eq!(numeric_field_values(&records, "year"), vec![2021.0]);
    }

    #[test]
    fn year_extraction_skips_missing_and_empty_fields() {
        let records = vec![
            record(&[("title", "untitled")]),
            record(&[("year", "")]),
            record(&[("year", "2010")]),
        ];
        assert_eq!(numeric_field_values(&records, "year"), vec![2010.0]);
    }

    #[test]
    fn general_lowercases_textual_values() {
        let records = vec![
            record(&[("journal", "IEEE Micro")]),
            record(&[("journal", "ACM Computing Surveys")]),
        ];
        let dataset = general_field_dataset(&records, "journal").unwrap();
        assert_eq!(
            dataset,
            Some(FieldDataset::Text(vec![
                "ieee micro".to_string(),
                "acm computing surveys".to_string(),
            ]))
        );
    }

    #[test]
    fn general_parses_uniformly_numeric_values() {
        let records = vec![record(&[("year", "2020")]), record(&[("year", "1999")])];
        let dataset = general_field_dataset(&records, "year").unwrap();
        assert_eq!(dataset, Some(FieldDataset::Numeric(vec![2020.0, 1999.0])));
    }

    #[test]
    fn general_flags_mixed_kinds() {
        let records = vec![
            record(&[("journal", "42")]),
            record(&[("journal", "IEEE Micro")]),
        ];
        let result = general_field_dataset(&records, "journal");
        assert!(matches!(
            result,
            Err(BenchError::MixedFieldTypes { ref field }) if field == "journal"
        ));
    }

    #[test]
    fn general_returns_none_for_absent_fields() {
        let records = vec![record(&[("title", "a survey")])];
        assert_eq!(general_field_dataset(&records, "journal").unwrap(), None);
    }
}
