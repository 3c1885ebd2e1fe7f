//! Survey column names
//!
//! The report runs against the Stack Overflow 2021 developer survey CSV,
//! which ships with a fixed schema. Column names are centralized here so the
//! analysis sections and the preprocessing step agree on spelling.

/// Highest completed education level.
pub const ED_LEVEL: &str = "EdLevel";

/// Age bracket of the respondent (e.g. "25-34 years old").
pub const AGE: &str = "Age";

/// Total years the respondent has been coding (string-valued brackets,
/// includes answers like "Less than 1 year").
pub const YEARS_CODE: &str = "YearsCode";

/// Years coding professionally.
pub const YEARS_CODE_PRO: &str = "YearsCodePro";

/// Employment status.
pub const EMPLOYMENT: &str = "Employment";

/// Country of residence.
pub const COUNTRY: &str = "Country";

/// US state, only answered by respondents living in the United States.
pub const US_STATE: &str = "US_State";

/// Semicolon-separated list of languages worked with in the last year.
pub const USED_LANGUAGES: &str = "LanguageHaveWorkedWith";

/// Semicolon-separated list of languages the respondent wants to work with.
pub const DESIRED_LANGUAGES: &str = "LanguageWantToWorkWith";

/// Self-reported mental-health status (semicolon-separated list).
pub const MENTAL_HEALTH: &str = "MentalHealth";

/// Size of the respondent's organization.
pub const ORG_SIZE: &str = "OrgSize";

/// Primary operating system.
pub const OP_SYS: &str = "OpSys";

/// Yearly salary converted to USD. Numeric and nullable; nulls are filtered
/// per-analysis rather than filled with the sentinel.
pub const YEARLY_SALARY: &str = "ConvertedCompYearly";

/// Categorical columns whose missing values are replaced by the sentinel
/// string during preprocessing. After `preprocess` none of these contains a
/// null.
pub const CATEGORICAL_COLUMNS: &[&str] = &[
    ED_LEVEL,
    AGE,
    YEARS_CODE,
    YEARS_CODE_PRO,
    EMPLOYMENT,
    US_STATE,
    USED_LANGUAGES,
    DESIRED_LANGUAGES,
    MENTAL_HEALTH,
    ORG_SIZE,
    OP_SYS,
];

/// Columns shown in the introduction's raw-data sample, in display order.
pub const SAMPLE_COLUMNS: &[&str] = &[
    ED_LEVEL,
    AGE,
    YEARS_CODE,
    EMPLOYMENT,
    COUNTRY,
    ORG_SIZE,
    OP_SYS,
    YEARLY_SALARY,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorical_columns_unique() {
        for (i, a) in CATEGORICAL_COLUMNS.iter().enumerate() {
            for b in &CATEGORICAL_COLUMNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_salary_not_sentinel_filled() {
        // The salary column keeps its nulls; it must never be in the
        // sentinel-filled set.
        assert!(!CATEGORICAL_COLUMNS.contains(&YEARLY_SALARY));
    }
}
