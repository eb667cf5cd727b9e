//! Scenario tests for the analysis core
//!
//! These drive `process_user_data_at` end-to-end over small fixed record
//! sets with a pinned reference instant, checking counts, distribution,
//! domain ranking, recency, and the warning output together.

use chrono::{DateTime, Duration, TimeZone, Utc};

use userscope::analysis::{apply_filters, process_user_data_at, UserFilter};
use userscope::models::{Role, User};

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn user(
    email: Option<&str>,
    first: Option<&str>,
    last: Option<&str>,
    role: Role,
    enabled: bool,
    created_days_ago: Option<i64>,
) -> User {
    User {
        id: None,
        email: email.map(str::to_string),
        first_name: first.map(str::to_string),
        last_name: last.map(str::to_string),
        role,
        enabled,
        created_at: created_days_ago.map(|days| fixed_now() - Duration::days(days)),
        updated_at: None,
    }
}

/// The demo trio: A and B healthy, C disabled with an empty last name
fn demo_trio() -> Vec<User> {
    vec![
        user(
            Some("john.doe@example.com"),
            Some("John"),
            Some("Doe"),
            Role::User,
            true,
            Some(10),
        ),
        user(
            Some("jane.smith@company.com"),
            Some("Jane"),
            Some("Smith"),
            Role::Admin,
            true,
            Some(5),
        ),
        user(
            Some("bob@test.org"),
            Some("Bob"),
            Some(""),
            Role::User,
            false,
            Some(40),
        ),
    ]
}

#[test]
fn unfiltered_demo_trio() {
    let report = process_user_data_at(&demo_trio(), None, fixed_now()).unwrap();

    assert_eq!(report.total_users, 3);
    assert_eq!(report.active_users, 2);
    assert_eq!(report.inactive_users, 1);
    assert_eq!(
        report.active_users + report.inactive_users,
        report.total_users
    );

    assert!((report.role_distribution[&Role::User] - 200.0 / 3.0).abs() < 1e-9);
    assert!((report.role_distribution[&Role::Admin] - 100.0 / 3.0).abs() < 1e-9);
    let sum: f64 = report.role_distribution.values().sum();
    assert!((sum - 100.0).abs() < 1e-9);

    // all domains appear once, so ranking falls back to first-seen order
    assert_eq!(
        report.top_email_domains,
        vec!["example.com", "company.com", "test.org"]
    );

    // A and B fall inside the 30-day window, C does not
    assert_eq!(report.recent_users, 2);

    assert!(report
        .potential_issues
        .contains(&"1 users have incomplete names".to_string()));
    // one disabled out of three is 33.3%, above the 10% threshold
    assert!(report
        .potential_issues
        .contains(&"High number of inactive users: 1 (33.3%)".to_string()));
}

#[test]
fn active_filter_drops_the_disabled_user() {
    let filter = UserFilter {
        active: Some(true),
        ..Default::default()
    };
    let report = process_user_data_at(&demo_trio(), Some(&filter), fixed_now()).unwrap();

    assert_eq!(report.total_users, 2);
    assert_eq!(report.inactive_users, 0);
    assert!(!report
        .potential_issues
        .iter()
        .any(|issue| issue.starts_with("High number of inactive users")));
}

#[test]
fn domain_filter_matches_case_insensitively() {
    let filter = UserFilter {
        email_domain: Some("EXAMPLE.COM".to_string()),
        ..Default::default()
    };
    let report = process_user_data_at(&demo_trio(), Some(&filter), fixed_now()).unwrap();

    assert_eq!(report.total_users, 1);
    assert_eq!(report.top_email_domains, vec!["example.com"]);
}

#[test]
fn role_filter_keeps_only_matching_records() {
    let filter = UserFilter {
        role: Some(Role::Admin),
        ..Default::default()
    };
    let report = process_user_data_at(&demo_trio(), Some(&filter), fixed_now()).unwrap();

    assert_eq!(report.total_users, 1);
    assert!((report.role_distribution[&Role::Admin] - 100.0).abs() < 1e-9);
    assert!(!report.role_distribution.contains_key(&Role::User));
}

#[test]
fn filtering_twice_with_the_same_filter_changes_nothing() {
    let users = demo_trio();
    let filter = UserFilter {
        active: Some(true),
        ..Default::default()
    };

    let once: Vec<User> = apply_filters(&users, Some(&filter))
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<User> = apply_filters(&once, Some(&filter))
        .into_iter()
        .cloned()
        .collect();

    assert_eq!(once.len(), 2);
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.email, b.email);
    }
}

#[test]
fn empty_input_yields_the_empty_report() {
    let filter = UserFilter {
        active: Some(true),
        ..Default::default()
    };
    let report = process_user_data_at(&[], Some(&filter), fixed_now()).unwrap();

    assert_eq!(report.total_users, 0);
    assert_eq!(report.active_users, 0);
    assert_eq!(report.inactive_users, 0);
    assert!(report.role_distribution.is_empty());
    assert!(report.top_email_domains.is_empty());
    assert!(report.creation_by_month.is_empty());
    assert_eq!(report.recent_users, 0);
    assert_eq!(report.average_name_length, 0.0);
    assert!(report.potential_issues.is_empty());
}

#[test]
fn short_and_missing_names_feed_the_warnings() {
    let users = vec![
        user(None, Some("Al"), Some(""), Role::User, true, None),
        user(None, None, None, Role::User, true, None),
    ];
    let report = process_user_data_at(&users, None, fixed_now()).unwrap();

    // both records are incomplete and both are shorter than four
    assert!(report
        .potential_issues
        .contains(&"2 users have incomplete names".to_string()));
    assert!(report
        .potential_issues
        .contains(&"2 users have very short names".to_string()));

    // "Al" has length 2, the anonymous record 0
    assert!((report.average_name_length - 1.0).abs() < 1e-9);
}

#[test]
fn warning_order_is_fixed() {
    let users = vec![
        user(None, Some("Al"), Some(""), Role::User, false, None),
        user(None, Some("Jane"), Some("Smith"), Role::User, true, None),
    ];
    let report = process_user_data_at(&users, None, fixed_now()).unwrap();

    assert_eq!(
        report.potential_issues,
        vec![
            "1 users have incomplete names".to_string(),
            "1 users have very short names".to_string(),
            "High number of inactive users: 1 (50.0%)".to_string(),
        ]
    );
}

#[test]
fn creation_histogram_buckets_by_month() {
    let report = process_user_data_at(&demo_trio(), None, fixed_now()).unwrap();

    // 10 and 5 days before 2024-06-15 are both June; 40 days is May
    assert_eq!(report.creation_by_month.get("2024-06"), Some(&2));
    assert_eq!(report.creation_by_month.get("2024-05"), Some(&1));
    assert_eq!(report.creation_by_month.len(), 2);
}

#[test]
fn malformed_emails_never_match_a_domain_filter() {
    let users = vec![
        user(Some("not-an-email"), Some("A"), Some("B"), Role::User, true, None),
        user(None, Some("C"), Some("D"), Role::User, true, None),
    ];
    let filter = UserFilter {
        email_domain: Some("example.com".to_string()),
        ..Default::default()
    };
    let report = process_user_data_at(&users, Some(&filter), fixed_now()).unwrap();
    assert_eq!(report.total_users, 0);
}
