//! Trait for the backend registration collaborator

use async_trait::async_trait;

use af_shared::types::{IdentifierKind, RegisterResponse};

/// Trait for the registration backend
#[async_trait]
pub trait RegisterClient: Send + Sync {
    /// Register a new account and trigger the OTP dispatch
    ///
    /// `Ok` with `is_success == false` is an explicit rejection (for
    /// example a duplicate identifier); `Err` is a transport or
    /// unexpected failure.
    async fn register_user(
        &self,
        identifier: &str,
        password: &str,
        confirm_password: &str,
        name: &str,
        kind: IdentifierKind,
    ) -> Result<RegisterResponse, String>;
}
