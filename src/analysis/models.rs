//! Data models for user analytics

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Filter conditions applied before aggregation
///
/// Conditions combine with logical AND; an unset condition imposes no
/// constraint. Unknown keys are ignored on deserialization, so an empty
/// or unrecognized query leaves the input untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub active: Option<bool>,
    #[serde(rename = "emailDomain")]
    pub email_domain: Option<String>,
}

impl UserFilter {
    /// True when no condition is set
    pub fn is_empty(&self) -> bool {
        self.role.is_none() && self.active.is_none() && self.email_domain.is_none()
    }

    /// Canonical representation used as the report cache key
    pub fn cache_key(&self) -> String {
        format!(
            "role={:?};active={:?};domain={:?}",
            self.role,
            self.active,
            self.email_domain.as_deref().map(str::to_lowercase),
        )
    }
}

/// Snapshot of one analysis run
///
/// Constructed once by the processor and never mutated afterwards; it
/// holds no references back to the input records.
#[derive(Debug, Clone, Serialize)]
pub struct UserAnalysisReport {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,

    /// Percentage of the filtered total per role (0-100)
    pub role_distribution: HashMap<Role, f64>,

    /// Up to five domains, most frequent first
    pub top_email_domains: Vec<String>,

    /// "YYYY-MM" to number of users created in that month
    pub creation_by_month: BTreeMap<String, u64>,

    /// Users created within the trailing 30 days
    pub recent_users: usize,

    pub average_name_length: f64,

    pub potential_issues: Vec<String>,

    pub processing_timestamp: DateTime<Utc>,
}

impl UserAnalysisReport {
    /// Report for an empty input set
    pub fn empty(processing_timestamp: DateTime<Utc>) -> Self {
        Self {
            total_users: 0,
            active_users: 0,
            inactive_users: 0,
            role_distribution: HashMap::new(),
            top_email_domains: Vec::new(),
            creation_by_month: BTreeMap::new(),
            recent_users: 0,
            average_name_length: 0.0,
            potential_issues: Vec::new(),
            processing_timestamp,
        }
    }
}

/// One month in the growth trend series
#[derive(Debug, Clone, Serialize)]
pub struct GrowthTrend {
    /// "YYYY-MM"
    pub period: String,

    /// Users created within the period
    pub new_users: usize,

    /// Users created at or before the end of the period
    pub total_users: usize,

    /// Percentage change against the total before the period started
    pub growth_rate: f64,
}

/// Activity counts and rates derived from `updated_at`
#[derive(Debug, Clone, Serialize)]
pub struct EngagementMetrics {
    pub daily_active_users: usize,
    pub weekly_active_users: usize,
    pub monthly_active_users: usize,
    pub daily_engagement_rate: f64,
    pub weekly_engagement_rate: f64,
    pub monthly_engagement_rate: f64,
}
