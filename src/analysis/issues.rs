//! Heuristic data-quality warnings
//!
//! Each rule is evaluated independently over the filtered records, so a
//! single record may contribute to several warnings. The relative order
//! of the emitted warnings is fixed: incomplete names, short names, high
//! inactive ratio.

use crate::models::User;

/// Combined names below this length (exclusive) count as very short
const SHORT_NAME_LIMIT: usize = 4;

/// Fraction of disabled users above which the inactive warning fires
const INACTIVE_RATIO_THRESHOLD: f64 = 0.1;

/// Combined length of first and last name, absent parts counting as zero
///
/// Counts Unicode scalar values; whitespace is not trimmed.
pub fn combined_name_length(user: &User) -> usize {
    let first = user.first_name.as_deref().unwrap_or("");
    let last = user.last_name.as_deref().unwrap_or("");
    first.chars().count() + last.chars().count()
}

/// Scan the filtered records for data-quality problems
pub fn identify_potential_issues(users: &[&User]) -> Vec<String> {
    let mut issues = Vec::new();

    let incomplete = users.iter().filter(|u| has_incomplete_name(u)).count();
    if incomplete > 0 {
        issues.push(format!("{} users have incomplete names", incomplete));
    }

    let short = users
        .iter()
        .filter(|u| combined_name_length(u) < SHORT_NAME_LIMIT)
        .count();
    if short > 0 {
        issues.push(format!("{} users have very short names", short));
    }

    let inactive = users.iter().filter(|u| !u.enabled).count();
    if !users.is_empty() && inactive as f64 > users.len() as f64 * INACTIVE_RATIO_THRESHOLD {
        let percentage = inactive as f64 / users.len() as f64 * 100.0;
        issues.push(format!(
            "High number of inactive users: {} ({:.1}%)",
            inactive, percentage
        ));
    }

    issues
}

/// First or last name absent, empty, or all-whitespace
fn has_incomplete_name(user: &User) -> bool {
    let blank =
        |name: &Option<String>| name.as_deref().map(str::trim).unwrap_or("").is_empty();
    blank(&user.first_name) || blank(&user.last_name)
}
