use std::sync::LazyLock;

use regex::Regex;

/// `local@domain.tld` shape: no whitespace, one `@`, a dot after it.
///
/// This is a liberal syntactic check. Many RFC 5322 addresses (quoted local
/// parts, IP literals) are rejected and many undeliverable ones accepted.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True for non-blank input that parses as a finite number. No range check.
pub fn is_valid_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    trimmed.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Strictly greater than zero. NaN is not positive.
pub fn is_positive_number(value: f64) -> bool {
    value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("runner.one+gels@club.example.org"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_number() {
        assert!(is_valid_number("3.14"));
        assert!(is_valid_number("-2"));
        assert!(is_valid_number(" 42 "));
        assert!(is_valid_number(".5"));
    }

    #[test]
    fn test_invalid_number() {
        assert!(!is_valid_number("   "));
        assert!(!is_valid_number(""));
        assert!(!is_valid_number("abc"));
        assert!(!is_valid_number("12g"));
        assert!(!is_valid_number("NaN"));
        assert!(!is_valid_number("inf"));
    }

    #[test]
    fn test_positive_number() {
        assert!(!is_positive_number(0.0));
        assert!(!is_positive_number(-1.0));
        assert!(is_positive_number(0.01));
        assert!(!is_positive_number(f64::NAN));
    }
}
