//! Types for the sign-up service

use serde::{Deserialize, Serialize};

/// The registration form as submitted by the screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupForm {
    /// Email address or 10-digit mobile number
    pub identifier: String,
    /// Display name
    pub name: String,
    pub password: String,
    pub confirm_password: String,
    /// Whether the terms-and-conditions checkbox was ticked
    pub terms_accepted: bool,
}

impl SignupForm {
    /// Build a form with the identifier and name trimmed, the way the
    /// screen trims its inputs
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
        terms_accepted: bool,
    ) -> Self {
        Self {
            identifier: identifier.into().trim().to_string(),
            name: name.into().trim().to_string(),
            password: password.into(),
            confirm_password: confirm_password.into(),
            terms_accepted,
        }
    }
}
