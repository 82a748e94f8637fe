//! The sorting catalogue: twelve ordering operations plus dispatch.
//!
//! Every operation takes its input `Vec` by value and returns the sorted
//! sequence, which makes the harness's copy-per-invocation contract explicit
//! in the signature. General algorithms are polymorphic over `T: Ord`;
//! numeric-only algorithms operate on `f64` values and validate their domain
//! before touching the data.

mod bitonic;
mod comparison;
mod distribution;
mod tree;

use std::cmp::Ordering;

pub use bitonic::bitonic_sort;
pub use comparison::{
    binary_insertion_sort, builtin_sort, comb_sort, gnome_sort, heap_sort, quick_sort,
    selection_sort,
};
pub use distribution::{bucket_sort, pigeonhole_sort, radix_sort};
pub use tree::tree_sort;

use crate::errors::BenchError;

/// Total-order key over `f64` field values.
///
/// Extracted datasets only ever hold parsed finite values, so IEEE total
/// ordering coincides with the natural numeric order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrdF64(pub f64);

impl Eq for OrdF64 {}

impl PartialOrd for OrdF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrdF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// General-domain algorithms, runnable against any totally-ordered dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeneralAlgorithm {
    /// Standard-library stable sort, the baseline.
    Builtin,
    /// Shrinking-gap bubble sort.
    Comb,
    /// Scan-minimum-and-swap.
    Selection,
    /// Binary-search-tree insert plus in-order walk.
    Tree,
    /// Middle-pivot three-way quicksort.
    Quick,
    /// Min-heap extraction.
    Heap,
    /// Single-cursor swap-back walk.
    Gnome,
    /// Binary-searched insertion into the sorted prefix.
    BinaryInsertion,
}

impl GeneralAlgorithm {
    /// Every general algorithm in declared catalogue order.
    pub const ALL: [GeneralAlgorithm; 8] = [
        GeneralAlgorithm::Builtin,
        GeneralAlgorithm::Comb,
        GeneralAlgorithm::Selection,
        GeneralAlgorithm::Tree,
        GeneralAlgorithm::Quick,
        GeneralAlgorithm::Heap,
        GeneralAlgorithm::Gnome,
        GeneralAlgorithm::BinaryInsertion,
    ];

    /// Display label used by catalogues and reports.
    pub fn label(&self) -> &'static str {
        match self {
            GeneralAlgorithm::Builtin => "Builtin Stable Sort",
            GeneralAlgorithm::Comb => "Comb Sort",
            GeneralAlgorithm::Selection => "Selection Sort",
            GeneralAlgorithm::Tree => "Tree Sort",
            GeneralAlgorithm::Quick => "QuickSort",
            GeneralAlgorithm::Heap => "HeapSort",
            GeneralAlgorithm::Gnome => "Gnome Sort",
            GeneralAlgorithm::BinaryInsertion => "Binary Insertion Sort",
        }
    }

    /// Run this algorithm over an owned dataset, returning the sorted sequence.
    pub fn run<T: Ord>(&self, data: Vec<T>) -> Vec<T> {
        match self {
            GeneralAlgorithm::Builtin => builtin_sort(data),
            GeneralAlgorithm::Comb => comb_sort(data),
            GeneralAlgorithm::Selection => selection_sort(data),
            GeneralAlgorithm::Tree => tree_sort(data),
            GeneralAlgorithm::Quick => quick_sort(data),
            GeneralAlgorithm::Heap => heap_sort(data),
            GeneralAlgorithm::Gnome => gnome_sort(data),
            GeneralAlgorithm::BinaryInsertion => binary_insertion_sort(data),
        }
    }
}

/// Numeric-only algorithms, runnable against validated numeric datasets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericAlgorithm {
    /// Counting array indexed by value offset.
    Pigeonhole,
    /// Least-significant-digit bucket passes.
    Radix,
    /// Width-partitioned buckets, each sorted independently.
    Bucket,
    /// Padded power-of-two sorting network.
    Bitonic,
}

impl NumericAlgorithm {
    /// Every numeric-only algorithm in declared catalogue order.
    pub const ALL: [NumericAlgorithm; 4] = [
        NumericAlgorithm::Pigeonhole,
        NumericAlgorithm::Radix,
        NumericAlgorithm::Bucket,
        NumericAlgorithm::Bitonic,
    ];

    /// Display label used by catalogues and reports.
    pub fn label(&self) -> &'static str {
        match self {
            NumericAlgorithm::Pigeonhole => "Pigeonhole Sort",
            NumericAlgorithm::Radix => "Radix Sort",
            NumericAlgorithm::Bucket => "Bucket Sort",
            NumericAlgorithm::Bitonic => "Bitonic Sort",
        }
    }

    /// Run this algorithm over an owned dataset, validating its domain first.
    pub fn run(&self, data: Vec<f64>) -> Result<Vec<f64>, BenchError> {
        match self {
            NumericAlgorithm::Pigeonhole => pigeonhole_sort(data),
            NumericAlgorithm::Radix => radix_sort(data),
            NumericAlgorithm::Bucket => bucket_sort(data),
            NumericAlgorithm::Bitonic => Ok(bitonic_sort(data)),
        }
    }
}

/// Reject fractional values for algorithms that index by value offset.
fn ensure_integral(data: &[f64], algorithm: &str) -> Result<(), BenchError> {
    for &value in data {
        if value.fract() != 0.0 {
            return Err(BenchError::NumericDomain(format!(
                "{algorithm} requires whole numbers, got {value}"
            )));
        }
    }
    Ok(())
}

/// Reject negative values for algorithms whose index math assumes `>= 0`.
fn ensure_non_negative(data: &[f64], algorithm: &str) -> Result<(), BenchError> {
    for &value in data {
        if value < 0.0 {
            return Err(BenchError::NumericDomain(format!(
                "{algorithm} requires non-negative values, got {value}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_labels_are_unique() {
        let mut labels: Vec<&str> = GeneralAlgorithm::ALL.iter().map(|a| a.label()).collect();
        labels.extend(NumericAlgorithm::ALL.iter().map(|a| a.label()));
        let total = labels.len();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), total);
    }

    #[test]
    fn ord_f64_orders_naturally() {
        let mut keys = vec![OrdF64(3.5), OrdF64(-1.0), OrdF64(2.0)];
        keys.sort();
        assert_eq!(keys, vec![OrdF64(-1.0), OrdF64(2.0), OrdF64(3.5)]);
    }

    #[test]
    fn dispatch_reaches_every_general_algorithm() {
        let input = vec![3, 1, 4, 1, 5, 9, 2, 6];
        let expected = vec![1, 1, 2, 3, 4, 5, 6, 9];
        for algorithm in GeneralAlgorithm::ALL {
            assert_eq!(
                algorithm.run(input.clone()),
                expected,
                "{} disagreed",
                algorithm.label()
            );
        }
    }

    #[test]
    fn dispatch_reaches_every_numeric_algorithm() {
        let input = vec![2020.0, 1999.0, 2005.0];
        let expected = vec![1999.0, 2005.0, 2020.0];
        for algorithm in NumericAlgorithm::ALL {
            assert_eq!(
                algorithm.run(input.clone()).unwrap(),
                expected,
                "{} disagreed",
                algorithm.label()
            );
        }
    }
}
