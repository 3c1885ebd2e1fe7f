//! Survey data handling
//!
//! - `load`: CSV reading and sentinel preprocessing
//! - `group`: grouped counts and boolean-mask aggregations
//! - `stats`: per-group numeric extraction and quartile fences

pub mod group;
pub mod load;
pub mod stats;

pub use group::{
    contains_counts, distinct_values, filter_not_null, grouped_counts, ContainsCounts,
    GroupedCounts,
};
pub use load::{preprocess, read_survey};
pub use stats::{numeric_by_group, outliers, overall_max, tukey_fences, Fences, NumericGroup};
