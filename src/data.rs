//! Record and dataset types shared by the reader, extraction, and harness.

use indexmap::IndexMap;

use crate::types::{FieldName, RawValue};

/// A single bibliographic record: an opaque field-name to value mapping.
///
/// Values are stored as the reader produced them (brace-stripped, whitespace
/// normalized). An empty value reads as "field not present".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BibRecord {
    fields: IndexMap<FieldName, RawValue>,
}

impl BibRecord {
    /// Create a record with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<FieldName>, value: impl Into<RawValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Look up a field value, treating empty strings as absent.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Number of stored fields, empty values included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate stored `(field, value)` pairs in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<FieldName>, V: Into<RawValue>> FromIterator<(K, V)> for BibRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Homogeneous values extracted from one field across records.
///
/// Dataset building guarantees the values are entirely textual (lower-cased)
/// or entirely numeric before any sort sees them.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldDataset {
    /// Lower-cased string values in record order.
    Text(Vec<String>),
    /// Parsed numeric values in record order.
    Numeric(Vec<f64>),
}

impl FieldDataset {
    /// Number of values in the dataset.
    pub fn len(&self) -> usize {
        match self {
            FieldDataset::Text(values) => values.len(),
            FieldDataset::Numeric(values) => values.len(),
        }
    }

    /// Whether the dataset holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
