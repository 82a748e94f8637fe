#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Author extraction and frequency counting.
pub mod authors;
/// BibTeX record provider.
pub mod bibtex;
/// Command-line front end shared by the `bibbench` binary.
pub mod cli;
/// Benchmark catalogue configuration types.
pub mod config;
/// Centralized constants used across extraction, sorts, and reports.
pub mod constants;
/// Bibliographic record and field dataset types.
pub mod data;
/// Field extraction, cleaning, and homogeneity validation.
pub mod extract;
/// The benchmark harness driving both catalogues.
pub mod harness;
/// Textual report renderers.
pub mod report;
/// The insertion-ordered result table and its serializable report form.
pub mod results;
/// Sorting algorithm implementations and catalogue dispatch.
pub mod sorts;
/// Shared type aliases.
pub mod types;
/// Text normalization helpers.
pub mod utils;

mod errors;

pub use authors::{AuthorCount, extract_authors, top_authors};
pub use bibtex::{read_bib, read_bib_file};
pub use config::{BenchConfig, GeneralSpec, NumericSpec};
pub use data::{BibRecord, FieldDataset};
pub use errors::BenchError;
pub use harness::BenchRunner;
pub use results::{BenchReport, BenchResults, RankedRun, RankingSummary, TimedRun};
pub use sorts::{GeneralAlgorithm, NumericAlgorithm, OrdF64};
pub use types::{AlgorithmName, AuthorName, FieldName, RawValue};
