//! Comparison-based general sorts over any `T: Ord`.
//!
//! Every function takes its input `Vec` by value and returns the sorted
//! sequence; the in-place algorithms simply mutate the owned vector before
//! handing it back.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::constants::sorts::COMB_SHRINK;

/// The standard library's stable ascending sort, timed as the baseline.
pub fn builtin_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    data.sort();
    data
}

/// Comb sort: bubble sort over a shrinking gap.
///
/// The gap starts at the full length and shrinks by a factor of 1.3 (floored,
/// clamped to 1) before every pass; the sort terminates once a gap-1 pass
/// completes without swapping.
pub fn comb_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    let n = data.len();
    let mut gap = n;
    let mut done = false;
    while !done {
        gap = (gap as f64 / COMB_SHRINK) as usize;
        if gap <= 1 {
            gap = 1;
            done = true;
        }
        let mut i = 0;
        while i + gap < n {
            if data[i] > data[i + gap] {
                data.swap(i, i + gap);
                done = false;
            }
            i += 1;
        }
    }
    data
}

/// Selection sort: scan `[i+1, n)` for the minimum and swap it into `i`.
/// O(n²) comparisons in every case, including already-sorted input.
pub fn selection_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    let n = data.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        data.swap(i, min_idx);
    }
    data
}

/// Quicksort with a middle pivot and three-way partition.
///
/// Builds a new sequence rather than sorting in place; equal keys collect
/// around the pivot so duplicate-heavy input does not recurse on itself.
/// Worst case O(n²) on adversarial pivots.
pub fn quick_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    if data.len() <= 1 {
        return data;
    }
    let pivot = data.swap_remove(data.len() / 2);
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for item in data {
        match item.cmp(&pivot) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }
    let mut sorted = quick_sort(less);
    sorted.push(pivot);
    sorted.extend(equal);
    sorted.extend(quick_sort(greater));
    sorted
}

/// Heap sort via a binary min-heap, extracting the minimum until empty.
pub fn heap_sort<T: Ord>(data: Vec<T>) -> Vec<T> {
    let mut heap: BinaryHeap<Reverse<T>> = data.into_iter().map(Reverse).collect();
    let mut sorted = Vec::with_capacity(heap.len());
    while let Some(Reverse(item)) = heap.pop() {
        sorted.push(item);
    }
    sorted
}

/// Gnome sort: walk a single cursor, swapping backward while out of order.
pub fn gnome_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    let mut index = 0;
    while index < data.len() {
        if index == 0 || data[index] >= data[index - 1] {
            index += 1;
        } else {
            data.swap(index, index - 1);
            index -= 1;
        }
    }
    data
}

/// Binary insertion sort: binary-search the sorted prefix, then splice.
///
/// Equal keys insert after their duplicates, keeping the sort stable.
/// O(n log n) comparisons but still O(n²) element moves.
pub fn binary_insertion_sort<T: Ord>(mut data: Vec<T>) -> Vec<T> {
    for i in 1..data.len() {
        let insert_at = data[..i].partition_point(|probe| probe <= &data[i]);
        data[insert_at..=i].rotate_right(1);
    }
    data
}
