//! Environment-driven tuning for property-based test suites.

use std::env;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV_KEY: &str = "SPANWISE_PBT_CASES";

/// Reads [`CASES_ENV_KEY`], falling back to `default_cases` when it is unset
/// or does not hold a positive integer.
///
/// # Examples
/// ```
/// use spanwise_test_support::property::case_count;
///
/// assert!(case_count(32) > 0);
/// ```
#[must_use]
pub fn case_count(default_cases: u32) -> u32 {
    let Ok(raw) = env::var(CASES_ENV_KEY) else {
        return default_cases;
    };
    match parse_cases(&raw) {
        Some(cases) => cases,
        None => {
            tracing::warn!(
                env = CASES_ENV_KEY,
                raw = %raw,
                default_cases,
                "ignoring invalid property-test case override",
            );
            default_cases
        }
    }
}

fn parse_cases(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|&cases| cases > 0)
}
