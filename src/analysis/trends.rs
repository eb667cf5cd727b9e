//! Growth and engagement series computed from user records
//!
//! Companion statistics to the core report: a trailing twelve-month
//! growth series over `created_at` and activity rates derived from
//! `updated_at`. Like the processor these are pure functions of the
//! record slice and one reference instant.

use chrono::{DateTime, Datelike, Duration, Months, Utc};

use crate::analysis::models::{EngagementMetrics, GrowthTrend};
use crate::models::User;

/// Months covered by the growth series
const GROWTH_WINDOW_MONTHS: u32 = 12;

/// Growth series for the trailing twelve calendar months, oldest first
pub fn growth_trends(users: &[User], now: DateTime<Utc>) -> Vec<GrowthTrend> {
    let mut trends = Vec::with_capacity(GROWTH_WINDOW_MONTHS as usize);

    for back in (0..GROWTH_WINDOW_MONTHS).rev() {
        let (year, month) = months_back(now, back);
        let period = format!("{:04}-{:02}", year, month);

        let mut new_users = 0;
        let mut total_users = 0;
        let mut previous_total = 0;
        for user in users {
            let Some(created) = user.created_at else {
                continue;
            };
            let created_month = (created.year(), created.month());
            if created_month == (year, month) {
                new_users += 1;
            }
            if created_month <= (year, month) {
                total_users += 1;
            }
            if created_month < (year, month) {
                previous_total += 1;
            }
        }

        let growth_rate = if previous_total == 0 {
            100.0
        } else {
            (total_users - previous_total) as f64 / previous_total as f64 * 100.0
        };

        trends.push(GrowthTrend {
            period,
            new_users,
            total_users,
            growth_rate,
        });
    }

    trends
}

/// Activity counts over trailing day/week/month windows
///
/// Records without `updated_at` contribute nothing; rates are 0.0 for an
/// empty input set.
pub fn engagement_metrics(users: &[User], now: DateTime<Utc>) -> EngagementMetrics {
    let day_ago = now - Duration::days(1);
    let week_ago = now - Duration::weeks(1);
    let month_ago = now - Months::new(1);

    let active_since = |cutoff: DateTime<Utc>| {
        users
            .iter()
            .filter(|u| u.updated_at.is_some_and(|updated| updated > cutoff))
            .count()
    };

    let daily = active_since(day_ago);
    let weekly = active_since(week_ago);
    let monthly = active_since(month_ago);

    let rate = |count: usize| {
        if users.is_empty() {
            0.0
        } else {
            count as f64 / users.len() as f64 * 100.0
        }
    };

    EngagementMetrics {
        daily_active_users: daily,
        weekly_active_users: weekly,
        monthly_active_users: monthly,
        daily_engagement_rate: rate(daily),
        weekly_engagement_rate: rate(weekly),
        monthly_engagement_rate: rate(monthly),
    }
}

/// Calendar month `back` months before `now`
fn months_back(now: DateTime<Utc>, back: u32) -> (i32, u32) {
    let mut year = now.year();
    let mut month0 = now.month() as i32 - 1 - back as i32;
    while month0 < 0 {
        month0 += 12;
        year -= 1;
    }
    (year, month0 as u32 + 1)
}
