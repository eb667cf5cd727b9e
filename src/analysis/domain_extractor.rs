//! Email-domain extraction
//!
//! Shared by the filter stage and the aggregation stage so both agree on
//! lower-casing and absent-handling.

/// Extract the domain part of an email address
///
/// Returns everything after the first `@`, lower-cased. Absent or empty
/// emails, and emails without an `@` (or with nothing after it), have no
/// domain.
pub fn extract_email_domain(email: Option<&str>) -> Option<String> {
    let email = email?;
    let (_, domain) = email.split_once('@')?;
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_and_lowercases() {
        assert_eq!(
            extract_email_domain(Some("john.doe@Example.COM")),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_absent_and_empty_have_no_domain() {
        assert_eq!(extract_email_domain(None), None);
        assert_eq!(extract_email_domain(Some("")), None);
        assert_eq!(extract_email_domain(Some("no-at-sign.example.com")), None);
        assert_eq!(extract_email_domain(Some("trailing@")), None);
    }

    #[test]
    fn test_splits_on_first_at() {
        assert_eq!(
            extract_email_domain(Some("odd@name@host.org")),
            Some("name@host.org".to_string())
        );
    }
}
