//! Authentication flow configuration

use serde::{Deserialize, Serialize};

/// Budgets and limits for the OTP verification session
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthFlowConfig {
    /// Seconds before an OTP session expires
    #[serde(default = "default_code_ttl")]
    pub code_ttl_seconds: u32,

    /// Maximum number of verification attempts per session
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Required length of the OTP code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minimum length of a new password
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,
}

impl Default for AuthFlowConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: default_code_ttl(),
            max_attempts: default_max_attempts(),
            code_length: default_code_length(),
            min_password_length: default_min_password_length(),
        }
    }
}

impl AuthFlowConfig {
    /// Set the OTP session time budget in seconds
    pub fn with_code_ttl_seconds(mut self, seconds: u32) -> Self {
        self.code_ttl_seconds = seconds;
        self
    }

    /// Set the verification attempt budget
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

fn default_code_ttl() -> u32 {
    120 // 2 minutes
}

fn default_max_attempts() -> u32 {
    3
}

fn default_code_length() -> usize {
    6
}

fn default_min_password_length() -> usize {
    6
}
