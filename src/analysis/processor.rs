//! Single-pass batch analysis over user records
//!
//! The processor consumes a finite, already-materialized slice of users
//! and produces one immutable [`UserAnalysisReport`]. Control flow is
//! strictly linear: filter, then the independent aggregations and the
//! issue scan, then assembly. Each statistic scans the filtered sequence
//! once; nothing here performs I/O or touches shared state, so concurrent
//! invocations over disjoint inputs need no synchronization.

use std::collections::{BTreeMap, HashMap};

use anyhow::anyhow;
use chrono::{DateTime, Duration, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::analysis::domain_extractor::extract_email_domain;
use crate::analysis::issues::{combined_name_length, identify_potential_issues};
use crate::analysis::models::{UserAnalysisReport, UserFilter};
use crate::models::{Role, User};

/// Number of top email domains reported
const TOP_DOMAIN_LIMIT: usize = 5;

/// Length of the recency window in days
const RECENT_WINDOW_DAYS: i64 = 30;

/// The single failure mode exposed to callers
///
/// Any unexpected error inside the stages is logged with context and
/// wrapped here; the stages themselves never leak their own error types.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("failed to process user data")]
    Internal(#[from] anyhow::Error),
}

/// Process and analyze user data
///
/// Captures the current instant exactly once; it serves as both the
/// recency cutoff reference and the processing timestamp, keeping the
/// result deterministic within a single call.
pub fn process_user_data(
    users: &[User],
    filter: Option<&UserFilter>,
) -> Result<UserAnalysisReport, ProcessingError> {
    process_user_data_at(users, filter, Utc::now())
}

/// Process and analyze user data against an explicit reference instant
///
/// An empty input yields the empty report without applying filters; any
/// unexpected internal failure surfaces as [`ProcessingError`].
pub fn process_user_data_at(
    users: &[User],
    filter: Option<&UserFilter>,
    now: DateTime<Utc>,
) -> Result<UserAnalysisReport, ProcessingError> {
    info!("Starting user data processing for {} users", users.len());

    if users.is_empty() {
        warn!("No users provided for processing");
        return Ok(UserAnalysisReport::empty(now));
    }

    let report = analyze(users, filter, now).map_err(|e| {
        error!("Error processing user data: {:#}", e);
        ProcessingError::Internal(e)
    })?;

    info!("User data processing completed successfully");
    Ok(report)
}

/// Apply the optional filter conditions, preserving input order
///
/// Conditions combine with logical AND. Records whose email has no
/// domain never satisfy an email-domain condition. Input records are not
/// mutated; the result borrows from the input slice.
pub fn apply_filters<'a>(users: &'a [User], filter: Option<&UserFilter>) -> Vec<&'a User> {
    let Some(filter) = filter.filter(|f| !f.is_empty()) else {
        return users.iter().collect();
    };

    users
        .iter()
        .filter(|user| matches_filter(user, filter))
        .collect()
}

fn matches_filter(user: &User, filter: &UserFilter) -> bool {
    if let Some(role) = filter.role {
        if user.role != role {
            return false;
        }
    }

    if let Some(active) = filter.active {
        if user.enabled != active {
            return false;
        }
    }

    if let Some(wanted) = filter.email_domain.as_deref() {
        match extract_email_domain(user.email.as_deref()) {
            // extracted domains are already lower-cased
            Some(domain) => {
                if wanted.to_lowercase() != domain {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

fn analyze(
    users: &[User],
    filter: Option<&UserFilter>,
    now: DateTime<Utc>,
) -> anyhow::Result<UserAnalysisReport> {
    let filtered = apply_filters(users, filter);
    info!("Applied filters, {} users remaining", filtered.len());

    let total_users = filtered.len();
    let active_users = filtered.iter().filter(|u| u.enabled).count();

    let cutoff = now
        .checked_sub_signed(Duration::days(RECENT_WINDOW_DAYS))
        .ok_or_else(|| anyhow!("recency cutoff out of range"))?;
    let recent_users = filtered
        .iter()
        .filter(|u| u.created_at.is_some_and(|created| created > cutoff))
        .count();

    let average_name_length = if total_users == 0 {
        0.0
    } else {
        let combined: usize = filtered.iter().map(|u| combined_name_length(u)).sum();
        combined as f64 / total_users as f64
    };

    Ok(UserAnalysisReport {
        total_users,
        active_users,
        inactive_users: total_users - active_users,
        role_distribution: role_distribution(&filtered),
        top_email_domains: top_email_domains(&filtered),
        creation_by_month: creation_by_month(&filtered),
        recent_users,
        average_name_length,
        potential_issues: identify_potential_issues(&filtered),
        processing_timestamp: now,
    })
}

/// Percentage of the filtered total per role; empty when the total is zero
fn role_distribution(filtered: &[&User]) -> HashMap<Role, f64> {
    let total = filtered.len();
    if total == 0 {
        return HashMap::new();
    }

    let mut counts: HashMap<Role, usize> = HashMap::new();
    for user in filtered {
        *counts.entry(user.role).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(role, count)| (role, count as f64 / total as f64 * 100.0))
        .collect()
}

/// Top domains by descending frequency, ties kept in first-seen order
fn top_email_domains(filtered: &[&User]) -> Vec<String> {
    struct DomainTally {
        count: u64,
        first_seen: usize,
    }

    let mut tallies: HashMap<String, DomainTally> = HashMap::new();
    let mut order = 0usize;
    for user in filtered {
        let Some(domain) = extract_email_domain(user.email.as_deref()) else {
            continue;
        };
        tallies
            .entry(domain)
            .and_modify(|t| t.count += 1)
            .or_insert(DomainTally {
                count: 1,
                first_seen: order,
            });
        order += 1;
    }

    let mut ranked: Vec<(String, DomainTally)> = tallies.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.count
            .cmp(&a.1.count)
            .then(a.1.first_seen.cmp(&b.1.first_seen))
    });

    ranked
        .into_iter()
        .take(TOP_DOMAIN_LIMIT)
        .map(|(domain, _)| domain)
        .collect()
}

/// "YYYY-MM" histogram over present creation timestamps
fn creation_by_month(filtered: &[&User]) -> BTreeMap<String, u64> {
    let mut months = BTreeMap::new();
    for user in filtered {
        if let Some(created_at) = user.created_at {
            let month = created_at.format("%Y-%m").to_string();
            *months.entry(month).or_insert(0) += 1;
        }
    }
    months
}
