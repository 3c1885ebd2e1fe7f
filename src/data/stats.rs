//! Per-group numeric extraction and quartile fences
//!
//! The salary boxplots need the raw values per category plus the Tukey
//! fences (1.5 × IQR beyond the quartiles) that separate outliers from the
//! whisker range. Quantiles use linear interpolation on the sorted values,
//! matching the plotters `Quartiles` convention so the fences drawn by the
//! boxplot element agree with the outlier points overlaid on top.

use std::collections::BTreeMap;

use polars::prelude::*;

use crate::error::Result;

/// Numeric values of one column for a single category label
#[derive(Debug, Clone)]
pub struct NumericGroup {
    pub label: String,
    pub values: Vec<f64>,
}

/// Collect the non-null values of `value_column` keyed by `group_column`.
///
/// Rows with a null label or a null/NaN value are skipped. Groups come back
/// sorted by label, so chart ordering is deterministic.
pub fn numeric_by_group(
    df: &DataFrame,
    group_column: &str,
    value_column: &str,
) -> Result<Vec<NumericGroup>> {
    let labels = df.column(group_column)?.as_materialized_series().clone();
    let values = df.column(value_column)?.as_materialized_series().clone();

    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for (label, value) in labels.str()?.into_iter().zip(values.f64()?.into_iter()) {
        let (Some(label), Some(value)) = (label, value) else {
            continue;
        };
        if value.is_nan() {
            continue;
        }
        grouped.entry(label.to_string()).or_default().push(value);
    }

    Ok(grouped
        .into_iter()
        .map(|(label, values)| NumericGroup { label, values })
        .collect())
}

/// Tukey fences: the whisker limits at 1.5 × IQR beyond the quartiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fences {
    pub lower: f64,
    pub upper: f64,
}

/// Compute the Tukey fences of a sample. None for an empty sample.
pub fn tukey_fences(values: &[f64]) -> Option<Fences> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = percentile(&sorted, 25.0);
    let q3 = percentile(&sorted, 75.0);
    let iqr = q3 - q1;

    Some(Fences {
        lower: q1 - 1.5 * iqr,
        upper: q3 + 1.5 * iqr,
    })
}

/// Values falling outside the Tukey fences
pub fn outliers(values: &[f64]) -> Vec<f64> {
    match tukey_fences(values) {
        Some(fences) => values
            .iter()
            .copied()
            .filter(|v| *v < fences.lower || *v > fences.upper)
            .collect(),
        None => Vec::new(),
    }
}

/// Largest value across all groups (None when every group is empty)
pub fn overall_max(groups: &[NumericGroup]) -> Option<f64> {
    groups
        .iter()
        .flat_map(|g| g.values.iter().copied())
        .fold(None, |max, v| match max {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

/// Linear-interpolation percentile over an already-sorted sample
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}
