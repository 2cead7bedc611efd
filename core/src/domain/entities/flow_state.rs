//! Session-scoped state shared between the sign-up and OTP screens.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use af_shared::types::IdentifierKind;

/// Data handed from a successful registration to the OTP screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtpHandoff {
    /// The identifier the user registered with, used as the user id
    /// for verification
    pub user_name: String,

    /// How the identifier was classified at sign-up
    pub identifier_kind: IdentifierKind,

    /// Opaque payload returned by the registration backend
    pub data_bundle: Option<serde_json::Value>,
}

/// Shared context owned by the flow orchestrator
///
/// The sign-up service writes the handoff on successful registration;
/// the OTP service reads it on mount. The orchestrator calls `clear`
/// when the flow ends, so the state never outlives the flow it belongs
/// to.
#[derive(Debug, Default)]
pub struct AuthFlowContext {
    handoff: Mutex<Option<OtpHandoff>>,
}

impl AuthFlowContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the handoff from a successful registration
    pub fn set_handoff(&self, handoff: OtpHandoff) {
        *self.handoff.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(handoff);
    }

    /// Read the current handoff, if registration has completed
    pub fn handoff(&self) -> Option<OtpHandoff> {
        self.handoff.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }

    /// The user id for verification, if a handoff is present
    pub fn user_id(&self) -> Option<String> {
        self.handoff().map(|h| h.user_name)
    }

    /// Drop the handoff when the flow ends
    pub fn clear(&self) {
        *self.handoff.lock().unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
    }
}
