//! Configuration for the OTP verification service

use af_shared::config::AuthFlowConfig;

use crate::domain::entities::otp_session::{
    INITIAL_SECONDS, MAX_ATTEMPTS, MIN_PASSWORD_LENGTH,
};

/// Configuration for the OTP verification service
#[derive(Debug, Clone)]
pub struct OtpSessionConfig {
    /// Seconds in the session time budget
    pub initial_seconds: u32,
    /// Verification attempts in the session budget
    pub max_attempts: u32,
    /// Minimum length accepted for the new password
    pub min_password_length: usize,
}

impl Default for OtpSessionConfig {
    fn default() -> Self {
        Self {
            initial_seconds: INITIAL_SECONDS,
            max_attempts: MAX_ATTEMPTS,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl From<&AuthFlowConfig> for OtpSessionConfig {
    fn from(config: &AuthFlowConfig) -> Self {
        Self {
            initial_seconds: config.code_ttl_seconds,
            max_attempts: config.max_attempts,
            min_password_length: config.min_password_length,
        }
    }
}
