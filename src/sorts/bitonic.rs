//! Bitonic sort with power-of-two padding.

/// Sentinel used to pad the input up to a power-of-two length. Compares
/// greater than every finite value, so padding always lands in the tail.
const PAD_SENTINEL: f64 = f64::INFINITY;

/// Bitonic sort over numeric values.
///
/// The network form requires a power-of-two length, so the input is padded
/// with sentinels, sorted ascending, then truncated back to its original
/// length — the sentinels all end up in the truncated tail.
pub fn bitonic_sort(mut data: Vec<f64>) -> Vec<f64> {
    let n = data.len();
    if n <= 1 {
        return data;
    }
    data.resize(n.next_power_of_two(), PAD_SENTINEL);
    let padded = data.len();
    sort_span(&mut data, 0, padded, true);
    data.truncate(n);
    data
}

fn sort_span(data: &mut [f64], start: usize, len: usize, ascending: bool) {
    if len <= 1 {
        return;
    }
    let half = len / 2;
    sort_span(data, start, half, true);
    sort_span(data, start + half, half, false);
    merge_span(data, start, len, ascending);
}

fn merge_span(data: &mut [f64], start: usize, len: usize, ascending: bool) {
    if len <= 1 {
        return;
    }
    let half = len / 2;
    for i in start..start + half {
        if (data[i] > data[i + half]) == ascending {
            data.swap(i, i + half);
        }
    }
    merge_span(data, start, half, ascending);
    merge_span(data, start + half, half, ascending);
}
