//! Grouped counts and boolean-mask aggregations
//!
//! Every analysis in the report reduces to one of three shapes:
//! - count rows per distinct value of one categorical column
//! - count rows matching / not matching a substring predicate
//! - drop rows where a column is null
//!
//! Null group labels are skipped (a column outside the sentinel-filled set
//! can still hold nulls, and those rows belong to no group).

use polars::prelude::*;

use crate::error::Result;

/// Row counts per distinct value of one categorical column, sorted ascending
/// by count with label as tie-breaker. The ordering is what the bar and pie
/// charts render, smallest group first.
#[derive(Debug, Clone)]
pub struct GroupedCounts {
    column: String,
    pairs: Vec<(String, u32)>,
}

impl GroupedCounts {
    /// Build directly from label/count pairs (used for predicate-based
    /// two-slice charts). Pairs keep the given order.
    pub fn from_pairs(column: &str, pairs: Vec<(String, u32)>) -> Self {
        Self {
            column: column.to_string(),
            pairs,
        }
    }

    /// Name of the column the counts were grouped on
    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.pairs.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.pairs.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// Sum of all group counts
    pub fn total(&self) -> u64 {
        self.pairs.iter().map(|(_, count)| *count as u64).sum()
    }

    /// Largest single group count (0 when empty)
    pub fn max_count(&self) -> u32 {
        self.pairs.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Label and share of the largest group
    pub fn top_group(&self) -> Option<(&str, f64)> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        // pairs are sorted ascending, the last one is the largest
        self.pairs
            .last()
            .map(|(label, count)| (label.as_str(), 100.0 * *count as f64 / total as f64))
    }

    /// Percentage share of one label, if present
    pub fn share(&self, label: &str) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        self.pairs
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| 100.0 * *count as f64 / total as f64)
    }

    /// Remove one group by label (used to drop the sentinel group from the
    /// US-state chart). Returns the removed count.
    pub fn remove_label(&mut self, label: &str) -> Option<u32> {
        let idx = self.pairs.iter().position(|(l, _)| l == label)?;
        Some(self.pairs.remove(idx).1)
    }
}

/// Count rows per distinct value of `column`, sorted ascending by count.
pub fn grouped_counts(df: &DataFrame, column: &str) -> Result<GroupedCounts> {
    let counted = df
        .clone()
        .lazy()
        .group_by([col(column)])
        .agg([len().alias("count")])
        .collect()?;

    let labels = counted.column(column)?.as_materialized_series().clone();
    let counts = counted.column("count")?.as_materialized_series().clone();

    let mut pairs: Vec<(String, u32)> = labels
        .str()?
        .into_iter()
        .zip(counts.u32()?.into_iter())
        .filter_map(|(label, count)| match (label, count) {
            (Some(label), Some(count)) => Some((label.to_string(), count)),
            _ => None,
        })
        .collect();

    pairs.sort_by(|(la, ca), (lb, cb)| ca.cmp(cb).then_with(|| la.cmp(lb)));

    Ok(GroupedCounts {
        column: column.to_string(),
        pairs,
    })
}

/// Counts of rows whose `column` value contains `needle` versus the rest.
/// A null value counts as not matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainsCounts {
    pub matching: u32,
    pub other: u32,
}

impl ContainsCounts {
    pub fn total(&self) -> u64 {
        self.matching as u64 + self.other as u64
    }

    /// Percentage of rows matching the predicate
    pub fn share_matching(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            100.0 * self.matching as f64 / total as f64
        }
    }
}

/// Substring-predicate counts over one string column.
pub fn contains_counts(df: &DataFrame, column: &str, needle: &str) -> Result<ContainsCounts> {
    let series = df.column(column)?.as_materialized_series().clone();

    let mut counts = ContainsCounts {
        matching: 0,
        other: 0,
    };
    for value in series.str()?.into_iter() {
        if value.is_some_and(|v| v.contains(needle)) {
            counts.matching += 1;
        } else {
            counts.other += 1;
        }
    }
    Ok(counts)
}

/// Keep only rows where `column` is not null. Row count strictly reduces or
/// stays the same.
pub fn filter_not_null(df: &DataFrame, column: &str) -> Result<DataFrame> {
    Ok(df
        .clone()
        .lazy()
        .filter(col(column).is_not_null())
        .collect()?)
}

/// Distinct values of a string column in order of first appearance.
pub fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let series = df.column(column)?.as_materialized_series().clone();

    let mut seen = std::collections::HashSet::new();
    let mut values = Vec::new();
    for value in series.str()?.into_iter().flatten() {
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> DataFrame {
        df!(
            "EdLevel" => ["Bachelor", "Master", "Bachelor", "Bachelor", "Primary"],
            "LanguageHaveWorkedWith" => [
                Some("Python;Rust"),
                Some("Java"),
                Some("Python"),
                None,
                Some("C++;Python"),
            ],
            "ConvertedCompYearly" => [Some(50000.0), None, Some(70000.0), Some(30000.0), None],
        )
        .unwrap()
    }

    #[test]
    fn test_grouped_counts_sum_to_total() {
        let df = fixture();
        let counts = grouped_counts(&df, "EdLevel").unwrap();
        assert_eq!(counts.total(), df.height() as u64);
    }

    #[test]
    fn test_grouped_counts_sorted_ascending() {
        let counts = grouped_counts(&fixture(), "EdLevel").unwrap();
        // Ties broken by label: Master and Primary both count 1
        assert_eq!(counts.labels(), vec!["Master", "Primary", "Bachelor"]);
        let collected: Vec<u32> = counts.iter().map(|(_, c)| c).collect();
        assert_eq!(collected, vec![1, 1, 3]);
        assert_eq!(counts.max_count(), 3);
    }

    #[test]
    fn test_grouped_counts_skips_null_labels() {
        let df = df!(
            "Country" => [Some("Germany"), None, Some("Germany"), Some("France")],
        )
        .unwrap();
        let counts = grouped_counts(&df, "Country").unwrap();
        assert_eq!(counts.labels(), vec!["France", "Germany"]);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_top_group_and_share() {
        let counts = grouped_counts(&fixture(), "EdLevel").unwrap();
        let (label, share) = counts.top_group().unwrap();
        assert_eq!(label, "Bachelor");
        assert!((share - 60.0).abs() < 1e-9);
        assert!((counts.share("Master").unwrap() - 20.0).abs() < 1e-9);
        assert_eq!(counts.share("PhD"), None);
    }

    #[test]
    fn test_remove_label() {
        let mut counts = grouped_counts(&fixture(), "EdLevel").unwrap();
        assert_eq!(counts.remove_label("Primary"), Some(1));
        assert_eq!(counts.remove_label("Primary"), None);
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_contains_counts() {
        let counts = contains_counts(&fixture(), "LanguageHaveWorkedWith", "Python").unwrap();
        assert_eq!(counts.matching, 3);
        // Null value counts as not matching
        assert_eq!(counts.other, 2);
        assert_eq!(counts.total(), 5);
        assert!((counts.share_matching() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_filter_not_null_reduces_or_preserves() {
        let df = fixture();
        let filtered = filter_not_null(&df, "ConvertedCompYearly").unwrap();
        assert_eq!(filtered.height(), 3);
        assert!(filtered.height() <= df.height());

        // Filtering an all-present column preserves the row count
        let unchanged = filter_not_null(&df, "EdLevel").unwrap();
        assert_eq!(unchanged.height(), df.height());
    }

    #[test]
    fn test_distinct_values_first_appearance_order() {
        let values = distinct_values(&fixture(), "EdLevel").unwrap();
        assert_eq!(values, vec!["Bachelor", "Master", "Primary"]);
    }

    #[test]
    fn test_from_pairs_keeps_order() {
        let counts = GroupedCounts::from_pairs(
            "LanguageHaveWorkedWith",
            vec![("Python".to_string(), 3), ("Other languages".to_string(), 2)],
        );
        assert_eq!(counts.labels(), vec!["Python", "Other languages"]);
        assert_eq!(counts.total(), 5);
    }
}
