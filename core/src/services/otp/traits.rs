//! Trait for the backend verification collaborator

use async_trait::async_trait;

use af_shared::types::VerifyOtpResponse;

/// Trait for the OTP verification backend
#[async_trait]
pub trait VerifyOtpClient: Send + Sync {
    /// Verify a code and set the new password for the given user
    ///
    /// `Ok` with `is_success == false` is an explicit rejection of the
    /// code; `Err` is a transport or unexpected failure.
    async fn verify_otp(
        &self,
        user_id: &str,
        new_password: &str,
        code: &str,
    ) -> Result<VerifyOtpResponse, String>;
}
