//! Mock implementations for testing the sign-up service

use async_trait::async_trait;
use std::sync::Mutex;

use af_shared::types::{IdentifierKind, RegisterResponse};

use crate::domain::value_objects::Screen;
use crate::services::navigation::Navigator;
use crate::services::signup::traits::RegisterClient;

/// Outcome the mock registration backend should produce
#[derive(Debug, Clone)]
pub enum RegisterOutcome {
    Success { data_bundle: Option<serde_json::Value> },
    Rejected { message: Option<String>, detail: Option<String> },
    TransportError,
}

/// A single recorded registration call
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRegistration {
    pub identifier: String,
    pub name: String,
    pub kind: IdentifierKind,
}

/// Mock registration backend with scriptable outcomes
pub struct MockRegisterClient {
    outcome: Mutex<RegisterOutcome>,
    pub calls: Mutex<Vec<RecordedRegistration>>,
}

impl MockRegisterClient {
    pub fn new(outcome: RegisterOutcome) -> Self {
        Self {
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RegisterClient for MockRegisterClient {
    async fn register_user(
        &self,
        identifier: &str,
        _password: &str,
        _confirm_password: &str,
        name: &str,
        kind: IdentifierKind,
    ) -> Result<RegisterResponse, String> {
        self.calls.lock().unwrap().push(RecordedRegistration {
            identifier: identifier.to_string(),
            name: name.to_string(),
            kind,
        });
        match self.outcome.lock().unwrap().clone() {
            RegisterOutcome::Success { data_bundle } => Ok(RegisterResponse::success(data_bundle)),
            RegisterOutcome::Rejected { message, detail } => Ok(RegisterResponse {
                is_success: false,
                data_bundle: None,
                error_message: message,
                error_show: detail,
            }),
            RegisterOutcome::TransportError => Err("connection reset".to_string()),
        }
    }
}

/// Mock shell navigator recording requested screens
#[derive(Default)]
pub struct MockNavigator {
    pub selected: Mutex<Vec<Screen>>,
}

impl MockNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_selected(&self) -> Option<Screen> {
        self.selected.lock().unwrap().last().copied()
    }

    pub fn select_count(&self) -> usize {
        self.selected.lock().unwrap().len()
    }
}

impl Navigator for MockNavigator {
    fn select_tab(&self, screen: Screen) {
        self.selected.lock().unwrap().push(screen);
    }
}
