//! Input validation helpers

use once_cell::sync::Lazy;
use regex::Regex;

static OTP_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{6}$").expect("valid OTP code regex")
});

/// Check if a string is a complete OTP code (exactly 6 digits)
pub fn is_valid_otp_code(code: &str) -> bool {
    OTP_CODE_REGEX.is_match(code)
}

/// Check if a password satisfies the minimum length
pub fn meets_min_password_length(password: &str, min_length: usize) -> bool {
    password.len() >= min_length
}

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_otp_code() {
        assert!(is_valid_otp_code("000000"));
        assert!(is_valid_otp_code("123456"));
    }

    #[test]
    fn test_invalid_otp_code() {
        assert!(!is_valid_otp_code(""));
        assert!(!is_valid_otp_code("12345"));
        assert!(!is_valid_otp_code("1234567"));
        assert!(!is_valid_otp_code("12345a"));
        assert!(!is_valid_otp_code("12 456"));
    }

    #[test]
    fn test_min_password_length() {
        assert!(meets_min_password_length("secret", 6));
        assert!(!meets_min_password_length("short", 6));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("x"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }
}
