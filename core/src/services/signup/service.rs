//! Main sign-up service implementation

use std::sync::Arc;

use crate::domain::entities::flow_state::{AuthFlowContext, OtpHandoff};
use crate::domain::value_objects::Screen;
use crate::errors::{DomainResult, ValidationError};
use crate::services::navigation::Navigator;

use af_shared::types::IdentifierKind;
use af_shared::utils::validation;

use super::traits::RegisterClient;
use super::types::SignupForm;

/// Service for the registration screen
///
/// Stateless between submissions; all state it produces lives on the
/// flow context.
pub struct SignupService<R: RegisterClient, N: Navigator> {
    /// Registration backend
    register_client: Arc<R>,
    /// Navigation seam toward the hosting shell
    navigator: Arc<N>,
    /// Flow context receiving the handoff for the OTP screen
    context: Arc<AuthFlowContext>,
}

impl<R: RegisterClient, N: Navigator> SignupService<R, N> {
    /// Create a new sign-up service
    pub fn new(
        context: Arc<AuthFlowContext>,
        register_client: Arc<R>,
        navigator: Arc<N>,
    ) -> Self {
        Self {
            register_client,
            navigator,
            context,
        }
    }

    /// Submit the registration form
    ///
    /// Form checks run locally in screen order, each aborting before
    /// any external call: required fields, password match, terms
    /// acceptance, identifier classification. On backend success the
    /// handoff is written to the flow context and navigation to the
    /// OTP screen is requested.
    pub async fn submit(&self, form: &SignupForm) -> DomainResult<()> {
        let kind = self.check_form(form)?;

        match self
            .register_client
            .register_user(
                &form.identifier,
                &form.password,
                &form.confirm_password,
                &form.name,
                kind,
            )
            .await
        {
            Ok(response) if response.is_success => {
                tracing::info!(
                    identifier_kind = %kind,
                    event = "signup_registered",
                    "Registration accepted, handing off to OTP screen"
                );
                self.context.set_handoff(OtpHandoff {
                    user_name: form.identifier.clone(),
                    identifier_kind: kind,
                    data_bundle: response.data_bundle,
                });
                self.navigator.select_tab(Screen::RegisterOtp);
                Ok(())
            }
            Ok(response) => {
                tracing::warn!(
                    identifier_kind = %kind,
                    event = "signup_rejected",
                    "Backend rejected the registration"
                );
                Err(ValidationError::RegistrationRejected {
                    message: response
                        .error_message
                        .unwrap_or_else(|| "Registration failed. Please try again.".to_string()),
                    detail: response.error_show,
                }
                .into())
            }
            Err(e) => {
                tracing::error!(
                    identifier_kind = %kind,
                    event = "signup_transport_error",
                    error = %e,
                    "Registration request failed"
                );
                Err(ValidationError::RegistrationUnavailable.into())
            }
        }
    }

    fn check_form(&self, form: &SignupForm) -> Result<IdentifierKind, ValidationError> {
        for (value, field) in [
            (&form.identifier, "identifier"),
            (&form.name, "name"),
            (&form.password, "password"),
        ] {
            if !validation::not_empty(value) {
                return Err(ValidationError::RequiredField {
                    field: field.to_string(),
                });
            }
        }

        if form.password != form.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if !form.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }

        let kind = IdentifierKind::classify(&form.identifier);
        if !kind.is_known() {
            return Err(ValidationError::UnrecognizedIdentifier);
        }
        Ok(kind)
    }
}
