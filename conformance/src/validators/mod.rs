//! Checks run against a parsed chain.
//!
//! Each validator appends its results to a shared [`ConformanceReport`](crate::ConformanceReport).

pub mod boundaries;
pub mod count;
pub mod ordering;
pub mod values;

/// Most detail lines a single check reports.
pub(crate) const MAX_DETAILS: usize = 10;

/// Truncates `details` to [`MAX_DETAILS`], noting how many were dropped.
pub(crate) fn cap_details(mut details: Vec<String>) -> Vec<String> {
    if details.len() > MAX_DETAILS {
        let dropped = details.len() - MAX_DETAILS;
        details.truncate(MAX_DETAILS);
        details.push(format!("... and {dropped} more"));
    }
    details
}
