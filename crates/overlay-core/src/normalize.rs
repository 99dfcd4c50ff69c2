// File: crates/overlay-core/src/normalize.rs
// Summary: Min/max normalization of raw values into [0, 1].

use crate::types::DataPoint;

/// Value used for every entry when the dataset has no spread.
pub const FLAT_VALUE: f64 = 0.5;

/// Map `values` onto [0, 1], minimum to 0 and maximum to 1.
/// Empty input yields an empty vec; a flat (or single-element) input yields `0.5` everywhere.
pub fn normalize(values: &[f64]) -> Vec<f64> {
    if values.is_empty() { return Vec::new(); }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }

    if max <= min {
        return vec![FLAT_VALUE; values.len()];
    }

    let range = max - min;
    values.iter().map(|&v| (v - min) / range).collect()
}

pub fn normalize_points(points: &[DataPoint]) -> Vec<f64> {
    let values = points.iter().map(|p| p.value).collect::<Vec<_>>();
    normalize(&values)
}
