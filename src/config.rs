use std::borrow::Cow;

use crate::constants::fields;
use crate::errors::BenchError;
use crate::sorts::{GeneralAlgorithm, NumericAlgorithm};
use crate::types::FieldName;

/// One named entry in the general-domain catalogue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralSpec {
    /// Display name used in the result table and reports.
    pub name: Cow<'static, str>,
    /// The ordering operation behind the name.
    pub algorithm: GeneralAlgorithm,
}

impl GeneralSpec {
    /// Catalogue entry under the algorithm's own display label.
    pub fn of(algorithm: GeneralAlgorithm) -> Self {
        Self {
            name: Cow::Borrowed(algorithm.label()),
            algorithm,
        }
    }
}

/// One named entry in the numeric-only catalogue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumericSpec {
    /// Display name used in the result table and reports.
    pub name: Cow<'static, str>,
    /// The ordering operation behind the name.
    pub algorithm: NumericAlgorithm,
}

impl NumericSpec {
    /// Catalogue entry under the algorithm's own display label.
    pub fn of(algorithm: NumericAlgorithm) -> Self {
        Self {
            name: Cow::Borrowed(algorithm.label()),
            algorithm,
        }
    }
}

/// Top-level benchmark configuration.
///
/// The defaults reproduce the full declared suite: four numeric-only specs
/// against the `year` field, and eight general specs against every field in
/// `title, author, year, journal` order.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    /// Field benchmarked by the numeric-only catalogue.
    pub numeric_field: FieldName,
    /// Fields benchmarked by the general catalogue, in visit order.
    pub general_fields: Vec<FieldName>,
    /// Numeric-only catalogue in declared execution order.
    pub numeric_specs: Vec<NumericSpec>,
    /// General catalogue in declared execution order.
    pub general_specs: Vec<GeneralSpec>,
}

impl BenchConfig {
    /// Reject field names outside the known record schema.
    ///
    /// Empty catalogues are allowed; a numeric-only or comparison-only run is
    /// a legitimate configuration.
    pub fn validate(&self) -> Result<(), BenchError> {
        for field in std::iter::once(&self.numeric_field).chain(&self.general_fields) {
            if !fields::GENERAL_FIELDS.contains(&field.as_str()) {
                return Err(BenchError::Configuration(format!(
                    "unknown field '{}', expected one of: {}",
                    field,
                    fields::GENERAL_FIELDS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            numeric_field: fields::NUMERIC_FIELD.to_string(),
            general_fields: fields::GENERAL_FIELDS
                .iter()
                .map(|field| field.to_string())
                .collect(),
            numeric_specs: NumericAlgorithm::ALL.iter().copied().map(NumericSpec::of).collect(),
            general_specs: GeneralAlgorithm::ALL.iter().copied().map(GeneralSpec::of).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalogues_cover_the_full_suite() {
        let config = BenchConfig::default();
        assert_eq!(config.numeric_field, "year");
        assert_eq!(config.general_fields, vec!["title", "author", "year", "journal"]);
        assert_eq!(config.numeric_specs.len(), 4);
        assert_eq!(config.general_specs.len(), 8);
        assert_eq!(config.numeric_specs[0].name, "Pigeonhole Sort");
        assert_eq!(config.general_specs[0].name, "Builtin Stable Sort");
    }

    #[test]
    fn validate_accepts_defaults_and_rejects_unknown_fields() {
        let mut config = BenchConfig::default();
        assert!(config.validate().is_ok());

        config.general_fields = vec!["title".to_string(), "publisher".to_string()];
        let err = config.validate().expect_err("unknown field must be rejected");
        assert!(err.to_string().contains("publisher"));
        assert!(err.to_string().contains("title, author, year, journal"));
    }
}
