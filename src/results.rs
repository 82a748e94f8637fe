//! The result table: per-(algorithm, field) timings and derived rankings.

use std::time::Duration;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::types::{AlgorithmName, FieldName};

/// One timed execution: wall-clock duration plus the items it sorted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimedRun {
    /// Elapsed wall-clock time for the single invocation.
    pub duration: Duration,
    /// Number of values in the dataset that was sorted.
    pub items: usize,
}

/// Insertion-ordered table of timed runs for one benchmark pass.
///
/// Cells are write-once: the first recording for an `(algorithm, field)` key
/// wins and later writes are ignored, so a completed table never changes
/// under a reader.
#[derive(Clone, Debug, Default)]
pub struct BenchResults {
    timings: IndexMap<AlgorithmName, IndexMap<FieldName, TimedRun>>,
    items: IndexMap<AlgorithmName, usize>,
}

impl BenchResults {
    /// Record one successful run. First write per key wins.
    pub fn record(&mut self, algorithm: &str, field: &str, duration: Duration, items: usize) {
        let per_field = self.timings.entry(algorithm.to_string()).or_default();
        if per_field.contains_key(field) {
            return;
        }
        per_field.insert(field.to_string(), TimedRun { duration, items });
        *self.items.entry(algorithm.to_string()).or_insert(0) += items;
    }

    /// Give `algorithm` an item counter starting at zero, without recording a
    /// run. A counter registered this way still shows up in the volume
    /// summary when every field ends up skipped.
    pub fn register(&mut self, algorithm: &str) {
        self.items.entry(algorithm.to_string()).or_insert(0);
    }

    /// Look up the timed run for one `(algorithm, field)` cell.
    pub fn run(&self, algorithm: &str, field: &str) -> Option<&TimedRun> {
        self.timings.get(algorithm)?.get(field)
    }

    /// Algorithms with at least one recorded run, in insertion order.
    pub fn algorithms(&self) -> impl Iterator<Item = &str> {
        self.timings.keys().map(String::as_str)
    }

    /// Iterate every `(algorithm, field, run)` cell in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &TimedRun)> {
        self.timings.iter().flat_map(|(algorithm, fields)| {
            fields
                .iter()
                .map(move |(field, run)| (algorithm.as_str(), field.as_str(), run))
        })
    }

    /// Total items processed by one algorithm across all of its runs.
    pub fn items_for(&self, algorithm: &str) -> usize {
        self.items.get(algorithm).copied().unwrap_or(0)
    }

    /// Iterate per-algorithm item counts in insertion order.
    pub fn item_counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.items.iter().map(|(algorithm, count)| (algorithm.as_str(), *count))
    }

    /// Sum of items processed across every algorithm.
    pub fn total_items(&self) -> usize {
        self.items.values().sum()
    }

    /// Number of timed cells in the table.
    pub fn len(&self) -> usize {
        self.timings.values().map(IndexMap::len).sum()
    }

    /// Whether the table holds no timed cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every timed cell sorted ascending by duration.
    ///
    /// Ties keep table order (the sort is stable), so reruns over identical
    /// timings produce identical rankings.
    pub fn ranking(&self) -> Vec<RankedRun> {
        let mut entries: Vec<RankedRun> = self
            .iter()
            .map(|(algorithm, field, run)| RankedRun {
                algorithm: algorithm.to_string(),
                field: field.to_string(),
                duration: run.duration,
            })
            .collect();
        entries.sort_by_key(|entry| entry.duration);
        entries
    }

    /// Fastest/slowest/mean statistics over every timed cell.
    pub fn summary(&self) -> Option<RankingSummary> {
        let ranking = self.ranking();
        let fastest = ranking.first()?.duration;
        let slowest = ranking.last()?.duration;
        let mean_seconds = ranking
            .iter()
            .map(|entry| entry.duration.as_secs_f64())
            .sum::<f64>()
            / ranking.len() as f64;
        Some(RankingSummary {
            fastest,
            slowest,
            mean_seconds,
            span: slowest - fastest,
        })
    }

    /// Freeze the table into its serializable report form.
    pub fn to_report(&self) -> BenchReport {
        let timings = self
            .timings
            .iter()
            .map(|(algorithm, fields)| {
                let seconds = fields
                    .iter()
                    .map(|(field, run)| (field.clone(), run.duration.as_secs_f64()))
                    .collect();
                (algorithm.clone(), seconds)
            })
            .collect();
        BenchReport {
            generated_at: Utc::now(),
            timings,
            items: self.items.clone(),
        }
    }
}

/// One entry of the ascending-by-duration ranking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedRun {
    /// Algorithm display name.
    pub algorithm: AlgorithmName,
    /// Field the run sorted.
    pub field: FieldName,
    /// Elapsed wall-clock time.
    pub duration: Duration,
}

impl RankedRun {
    /// Combined `algorithm (field)` label used by the ranking chart.
    pub fn label(&self) -> String {
        format!("{} ({})", self.algorithm, self.field)
    }
}

/// Headline statistics over a completed ranking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankingSummary {
    /// Shortest recorded duration.
    pub fastest: Duration,
    /// Longest recorded duration.
    pub slowest: Duration,
    /// Mean duration in seconds across all cells.
    pub mean_seconds: f64,
    /// Difference between slowest and fastest.
    pub span: Duration,
}

/// Serializable snapshot of one benchmark run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BenchReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Seconds per `(algorithm, field)`, in table order.
    pub timings: IndexMap<AlgorithmName, IndexMap<FieldName, f64>>,
    /// Items processed per algorithm.
    pub items: IndexMap<AlgorithmName, usize>,
}
