//! Collaborator response shapes
//!
//! These mirror the payloads returned by the backend registration and
//! OTP verification endpoints. The wire format itself is owned by the
//! backend; only the fields the flow consumes are modeled here.

use serde::{Deserialize, Serialize};

/// Response from the registration collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Whether registration was accepted
    #[serde(rename = "isSuccess")]
    pub is_success: bool,

    /// Opaque payload carried through to the OTP screen
    #[serde(rename = "dataBundle", skip_serializing_if = "Option::is_none")]
    pub data_bundle: Option<serde_json::Value>,

    /// Error message for the inline form error
    #[serde(rename = "errorMessage", skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Additional detail the backend wants shown prominently
    #[serde(rename = "errorShow", skip_serializing_if = "Option::is_none")]
    pub error_show: Option<String>,
}

impl RegisterResponse {
    /// Build a successful response carrying an opaque data bundle
    pub fn success(data_bundle: Option<serde_json::Value>) -> Self {
        Self {
            is_success: true,
            data_bundle,
            error_message: None,
            error_show: None,
        }
    }

    /// Build a rejection with an inline error message
    pub fn failure(error_message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            data_bundle: None,
            error_message: Some(error_message.into()),
            error_show: None,
        }
    }
}

/// Response from the OTP verification collaborator
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    /// Whether the code was accepted and the password changed
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
}

impl VerifyOtpResponse {
    pub fn success() -> Self {
        Self { is_success: true }
    }

    pub fn rejected() -> Self {
        Self { is_success: false }
    }
}
