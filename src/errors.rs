use std::io;

use thiserror::Error;

use crate::types::FieldName;

/// Error type for sort-domain validation, dataset building, and reader failures.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unsupported numeric input: {0}")]
    NumericDomain(String),
    #[error("field '{field}' mixes numeric and textual values")]
    MixedFieldTypes { field: FieldName },
    #[error("sort aborted: {0}")]
    SortFailure(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
