//! Quantile bucket boundaries for choropleth color assignment.
//!
//! Given the current dataset values and a bucket count N, computes the N−1
//! interior boundaries that split the sorted values into near-equal-sized
//! buckets. Recompute on every data change; for the dataset sizes involved
//! (tens to low thousands of regions) this costs microseconds.

/// Compute quantile bucket boundaries.
///
/// NaN entries are discarded before processing. The remaining values are
/// sorted ascending and each boundary `i` in `1..buckets` is read off at the
/// fractional rank `i/buckets * (n-1)` by linear interpolation between the
/// two bracketing order statistics (the R-7 estimator, NumPy's default).
/// Boundaries are rounded for presentation *after* interpolation, never
/// before, since rounding intermediate ranks would shift bucket membership.
///
/// Returns `buckets - 1` non-decreasing values, or an empty vec when the
/// filtered input is empty. Callers must handle the empty case (single
/// uniform color). `buckets < 2` yields no interior boundaries; passing `0`
/// is a contract violation that degenerates to the same empty result rather
/// than panicking.
///
/// ```
/// use statsmap_rs::thresholds::quantile_thresholds;
///
/// assert_eq!(
///     quantile_thresholds(&[1.0, 2.0, 3.0, 4.0, 5.0], 5),
///     vec![1.8, 2.6, 3.4, 4.2],
/// );
/// assert!(quantile_thresholds(&[], 5).is_empty());
/// ```
pub fn quantile_thresholds(values: &[f64], buckets: usize) -> Vec<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() || buckets < 2 {
        return Vec::new();
    }
    // NaN is gone, so partial_cmp cannot fail.
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let n = sorted.len();
    (1..buckets)
        .map(|i| {
            let position = (i as f64 / buckets as f64) * (n - 1) as f64;
            let lower = position.floor() as usize;
            let upper = position.ceil() as usize;
            let weight = position - lower as f64;
            let boundary = sorted[lower] * (1.0 - weight) + sorted[upper] * weight;
            round_threshold(boundary)
        })
        .collect()
}

/// Presentational rounding for a computed boundary.
///
/// Values within `1e-4` of an integer snap to it; otherwise the decimal
/// count depends on magnitude: 3 decimals below 1, 2 below 10, 1 below 100,
/// none above. Keeps legend labels free of floating-point noise. Must only
/// ever be applied to final output, not to values fed back into bucketing.
pub fn round_threshold(value: f64) -> f64 {
    let nearest = value.round();
    if (value - nearest).abs() < 1e-4 {
        return nearest;
    }
    let decimals: i32 = match value.abs() {
        a if a < 1.0 => 3,
        a if a < 10.0 => 2,
        a if a < 100.0 => 1,
        _ => 0,
    };
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
