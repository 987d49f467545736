use std::cmp::Ordering;

/// Safe comparison of floating point numbers, handling NaN values
///
/// NaN compares equal to NaN and greater than every number, which keeps
/// the ordering total so it can drive `sort_by`.
pub fn safe_float_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Mean of a sequence of values, 0.0 for an empty sequence
pub fn mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    if count > 0 {
        sum / count as f64
    } else {
        0.0
    }
}

/// Percentage of `count` within `total`, 0.0 when `total` is zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total > 0 {
        (count as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
