//! Candidate input validators. Both are total functions over any string.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex")
});

// Exactly 10 digits, first digit 6-9 (Indian mobile numbers)
static MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").expect("mobile regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_RE.is_match(mobile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("first.last+tag@sub.domain.co"));
        assert!(is_valid_email("user_name%x@host-name.org"));
    }

    #[test]
    fn test_email_missing_at() {
        assert!(!is_valid_email("ab.com"));
    }

    #[test]
    fn test_email_missing_domain_dot() {
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn test_email_short_tld() {
        assert!(!is_valid_email("a@b.c"));
    }

    #[test]
    fn test_email_disallowed_characters() {
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@c!.com"));
    }

    #[test]
    fn test_email_empty() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_mobiles() {
        assert!(is_valid_mobile("9876543210"));
        assert!(is_valid_mobile("6000000000"));
        assert!(is_valid_mobile("7123456789"));
        assert!(is_valid_mobile("8999999999"));
    }

    #[test]
    fn test_mobile_bad_first_digit() {
        assert!(!is_valid_mobile("5123456789"));
        assert!(!is_valid_mobile("0987654321"));
    }

    #[test]
    fn test_mobile_wrong_length() {
        assert!(!is_valid_mobile("98765432")); // 8 digits
        assert!(!is_valid_mobile("987654321")); // 9 digits
        assert!(!is_valid_mobile("98765432100")); // 11 digits
    }

    #[test]
    fn test_mobile_non_digits() {
        assert!(!is_valid_mobile("98765-4321"));
        assert!(!is_valid_mobile("phone12345"));
        assert!(!is_valid_mobile(""));
    }
}
