//! Sample user records for the demo server and the report CLI

use chrono::{Duration, Utc};
use rand::RngExt;

use crate::models::{Role, User};

const SAMPLE_FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Bob", "Alice", "Al", "Maria", "Chen", "Priya", "Omar", "Lena",
];

const SAMPLE_LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Johnson", "Garcia", "Lee", "Patel", "Novak", "Kim", "Okafor", "Weber",
];

const SAMPLE_DOMAINS: &[&str] = &["example.com", "company.com", "test.org", "mail.dev"];

/// The fixed demo records: two healthy users and one with known
/// data-quality problems (empty last name, disabled, stale)
pub fn sample_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User {
            id: None,
            email: Some("john.doe@example.com".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            role: Role::User,
            enabled: true,
            created_at: Some(now - Duration::days(10)),
            updated_at: Some(now - Duration::days(2)),
        },
        User {
            id: None,
            email: Some("jane.smith@company.com".to_string()),
            first_name: Some("Jane".to_string()),
            last_name: Some("Smith".to_string()),
            role: Role::Admin,
            enabled: true,
            created_at: Some(now - Duration::days(5)),
            updated_at: Some(now - Duration::hours(6)),
        },
        User {
            id: None,
            email: Some("bob@test.org".to_string()),
            first_name: Some("Bob".to_string()),
            last_name: Some("".to_string()),
            role: Role::User,
            enabled: false,
            created_at: Some(now - Duration::days(40)),
            updated_at: Some(now - Duration::days(35)),
        },
    ]
}

/// Generate `count` randomized records spread over the trailing year
pub fn random_users(count: usize) -> Vec<User> {
    let mut rng = rand::rng();
    let now = Utc::now();

    (0..count)
        .map(|i| {
            let first = SAMPLE_FIRST_NAMES[rng.random_range(0..SAMPLE_FIRST_NAMES.len())];
            let last = SAMPLE_LAST_NAMES[rng.random_range(0..SAMPLE_LAST_NAMES.len())];
            let domain = SAMPLE_DOMAINS[rng.random_range(0..SAMPLE_DOMAINS.len())];
            let enabled = rng.random_range(0..100) >= 15;
            let created_days = rng.random_range(0..365);

            User {
                id: None,
                email: Some(format!(
                    "{}.{}{}@{}",
                    first.to_lowercase(),
                    last.to_lowercase(),
                    i,
                    domain
                )),
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                role: if rng.random_range(0..10) == 0 {
                    Role::Admin
                } else {
                    Role::User
                },
                enabled,
                created_at: Some(now - Duration::days(created_days)),
                updated_at: enabled.then(|| now - Duration::days(rng.random_range(0..60))),
            }
        })
        .collect()
}
