//! Classification of free-form user identifiers

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});

static MOBILE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{10}$").expect("valid mobile regex")
});

/// The kind of identifier a user signed up with
///
/// Registration accepts either an email address or a 10-digit mobile
/// number; anything else is `Unknown` and rejected before any external
/// call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IdentifierKind {
    Email,
    Mobile,
    Unknown,
}

impl IdentifierKind {
    /// Classify a free-form identifier string
    ///
    /// Total function: every input maps to exactly one variant.
    pub fn classify(input: &str) -> Self {
        if EMAIL_REGEX.is_match(input) {
            IdentifierKind::Email
        } else if MOBILE_REGEX.is_match(input) {
            IdentifierKind::Mobile
        } else {
            IdentifierKind::Unknown
        }
    }

    /// The label used on the registration wire
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Email => "EMAIL",
            IdentifierKind::Mobile => "MOBILE",
            IdentifierKind::Unknown => "UNKNOWN",
        }
    }

    /// Whether the identifier is usable for registration
    pub fn is_known(&self) -> bool {
        !matches!(self, IdentifierKind::Unknown)
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_email() {
        assert_eq!(IdentifierKind::classify("user@example.com"), IdentifierKind::Email);
        assert_eq!(IdentifierKind::classify("a.b+c@mail.co.uk"), IdentifierKind::Email);
    }

    #[test]
    fn test_classify_mobile() {
        assert_eq!(IdentifierKind::classify("0712345678"), IdentifierKind::Mobile);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(IdentifierKind::classify(""), IdentifierKind::Unknown);
        assert_eq!(IdentifierKind::classify("not an email"), IdentifierKind::Unknown);
        // Too short and too long for a mobile number
        assert_eq!(IdentifierKind::classify("12345"), IdentifierKind::Unknown);
        assert_eq!(IdentifierKind::classify("071234567890"), IdentifierKind::Unknown);
        // Whitespace disqualifies an email
        assert_eq!(IdentifierKind::classify("user @example.com"), IdentifierKind::Unknown);
        // Missing dot in the domain part
        assert_eq!(IdentifierKind::classify("user@example"), IdentifierKind::Unknown);
    }

    #[test]
    fn test_wire_labels() {
        assert_eq!(IdentifierKind::Email.as_str(), "EMAIL");
        assert_eq!(IdentifierKind::Mobile.as_str(), "MOBILE");
        assert_eq!(IdentifierKind::Unknown.as_str(), "UNKNOWN");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&IdentifierKind::Email).unwrap();
        assert_eq!(json, "\"EMAIL\"");
        let kind: IdentifierKind = serde_json::from_str("\"MOBILE\"").unwrap();
        assert_eq!(kind, IdentifierKind::Mobile);
    }
}
