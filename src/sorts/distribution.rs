//! Distribution sorts over numeric datasets: pigeonhole, bucket, radix.
//!
//! These back the numeric-only catalogue entries. Each validates its domain
//! up front and reports violations as errors instead of producing a silently
//! wrong ordering.

use crate::constants::sorts::{PIGEONHOLE_SPAN_LIMIT, RADIX_BASE};
use crate::errors::BenchError;

use super::{ensure_integral, ensure_non_negative};

/// Pigeonhole sort over integral values.
///
/// Builds a counting array spanning `max - min + 1` slots and reconstructs
/// the output by walking the slots ascending. Negative values are fine (the
/// min offset shifts them); empty or fractional input is a domain error, and
/// a spread too large to allocate is a sort failure.
pub fn pigeonhole_sort(data: Vec<f64>) -> Result<Vec<f64>, BenchError> {
    if data.is_empty() {
        return Err(BenchError::NumericDomain(
            "pigeonhole sort requires at least one value".into(),
        ));
    }
    ensure_integral(&data, "pigeonhole sort")?;

    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span >= PIGEONHOLE_SPAN_LIMIT as f64 {
        return Err(BenchError::SortFailure(format!(
            "pigeonhole spread {span} exceeds the supported range"
        )));
    }

    let mut holes = vec![0usize; span as usize + 1];
    for &value in &data {
        holes[(value - min) as usize] += 1;
    }
    let mut sorted = Vec::with_capacity(data.len());
    for (offset, &count) in holes.iter().enumerate() {
        for _ in 0..count {
            sorted.push(min + offset as f64);
        }
    }
    Ok(sorted)
}

/// Bucket sort over non-negative values.
///
/// Allocates one bucket per element with width `max / n`, drops each value
/// into `floor(value / width)` (clamped to the last bucket), sorts buckets
/// independently, and concatenates them in bucket order.
pub fn bucket_sort(data: Vec<f64>) -> Result<Vec<f64>, BenchError> {
    if data.is_empty() {
        return Ok(data);
    }
    ensure_non_negative(&data, "bucket sort")?;

    let n = data.len();
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == 0.0 {
        // All zeros: already sorted, and a zero bucket width would divide by it.
        return Ok(data);
    }
    let width = max / n as f64;
    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for value in data {
        let index = ((value / width) as usize).min(n - 1);
        buckets[index].push(value);
    }
    let mut sorted = Vec::with_capacity(n);
    for bucket in &mut buckets {
        bucket.sort_by(f64::total_cmp);
        sorted.append(bucket);
    }
    Ok(sorted)
}

/// Radix sort over non-negative integral values.
///
/// Least-significant-digit passes with ten buckets, looping while the
/// maximum value still has digits at the current magnitude. Per-pass
/// bucketing is stable, which is what makes the whole sort correct.
/// Values beyond the 64-bit digit domain are a domain error, since the
/// conversion to digits would clip them.
pub fn radix_sort(data: Vec<f64>) -> Result<Vec<f64>, BenchError> {
    if data.is_empty() {
        return Ok(data);
    }
    ensure_non_negative(&data, "radix sort")?;
    ensure_integral(&data, "radix sort")?;

    let mut values = Vec::with_capacity(data.len());
    for value in data {
        let digits = value as u64;
        // The cast saturates past u64::MAX; a failed round trip means the
        // value would come back different from what went in.
        if digits as f64 != value {
            return Err(BenchError::NumericDomain(format!(
                "radix sort requires values below 2^64, got {value}"
            )));
        }
        values.push(digits);
    }
    let max = u128::from(values.iter().copied().max().unwrap_or(0));
    let base = u128::from(RADIX_BASE);

    let mut exp: u128 = 1;
    while max / exp > 0 {
        let mut buckets: Vec<Vec<u64>> = vec![Vec::new(); RADIX_BASE as usize];
        for &value in &values {
            let digit = ((u128::from(value) / exp) % base) as usize;
            buckets[digit].push(value);
        }
        values.clear();
        for bucket in &mut buckets {
            values.append(bucket);
        }
        exp *= base;
    }
    Ok(values.into_iter().map(|value| value as f64).collect())
}
