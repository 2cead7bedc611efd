//! Main OTP verification service implementation

use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::entities::flow_state::AuthFlowContext;
use crate::domain::entities::otp_session::OtpSession;
use crate::domain::value_objects::Screen;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::services::navigation::Navigator;

use af_shared::utils::validation;

use super::config::OtpSessionConfig;
use super::timer::CountdownTimer;
use super::traits::VerifyOtpClient;

/// Service owning one OTP verification session
///
/// Holds the session state, the countdown timer handle and the seams
/// toward the verification backend and the hosting shell. Created when
/// the verification screen mounts and dropped when the user navigates
/// away; dropping it cancels the timer.
pub struct OtpService<V: VerifyOtpClient, N: Navigator> {
    /// Session state shared with the countdown task
    session: Arc<Mutex<OtpSession>>,
    /// Verification backend
    verify_client: Arc<V>,
    /// Navigation seam toward the hosting shell
    navigator: Arc<N>,
    /// Flow context carrying the sign-up handoff
    context: Arc<AuthFlowContext>,
    /// Service configuration
    config: OtpSessionConfig,
    /// Timer handle; replaced on resend, dropped on terminal states
    timer: Mutex<Option<CountdownTimer>>,
}

impl<V: VerifyOtpClient, N: Navigator> OtpService<V, N> {
    /// Create a new service with a fresh session
    ///
    /// The timer is not armed yet; call [`start`](Self::start) once the
    /// screen is mounted.
    pub fn new(
        context: Arc<AuthFlowContext>,
        verify_client: Arc<V>,
        navigator: Arc<N>,
        config: OtpSessionConfig,
    ) -> Self {
        let session = OtpSession::with_budgets(config.max_attempts, config.initial_seconds);

        tracing::info!(
            session_id = %session.id,
            event = "otp_session_created",
            "Created OTP verification session"
        );

        Self {
            session: Arc::new(Mutex::new(session)),
            verify_client,
            navigator,
            context,
            config,
            timer: Mutex::new(None),
        }
    }

    /// Arm the countdown timer
    ///
    /// Must be called from within a tokio runtime. Re-arming replaces
    /// the previous handle, which aborts the old task.
    pub fn start(&self) {
        let timer = CountdownTimer::start(Arc::clone(&self.session));
        *self.lock_timer() = Some(timer);
    }

    /// A snapshot of the current session state for rendering
    pub fn snapshot(&self) -> OtpSession {
        self.lock_session().clone()
    }

    /// Record a user edit to the code field
    ///
    /// Clears the last error, mirroring the screen behavior.
    pub fn set_code(&self, input: &str) {
        self.lock_session().set_code(input);
    }

    /// Submit a code and new password for verification
    ///
    /// Local preconditions are checked in order, each aborting before
    /// any external call: complete 6-digit code, attempts remaining,
    /// time remaining, password length, and a user id from the sign-up
    /// handoff. Only then is the backend asked to verify.
    ///
    /// On success the session becomes `Verified`, the timer is
    /// cancelled and navigation to the login screen is requested. On
    /// rejection or transport failure one attempt is consumed and the
    /// user-facing message is recorded on the session.
    pub async fn submit(&self, code: &str, new_password: &str) -> DomainResult<()> {
        let session_id = {
            let session = self.lock_session();
            session.id
        };

        // Local precondition checks, in screen order
        if let Err(e) = self.check_preconditions(code, new_password) {
            tracing::warn!(
                session_id = %session_id,
                event = "otp_submit_rejected_locally",
                error = %e,
                "Submission rejected before contacting the backend"
            );
            self.lock_session().set_error(e.user_message());
            return Err(e);
        }

        let user_id = match self.context.user_id() {
            Some(id) => id,
            None => {
                let e: DomainError = AuthError::MissingUserId.into();
                tracing::warn!(
                    session_id = %session_id,
                    event = "otp_submit_missing_user",
                    "No sign-up handoff present on the flow context"
                );
                self.lock_session().set_error(e.user_message());
                return Err(e);
            }
        };

        match self.verify_client.verify_otp(&user_id, new_password, code).await {
            Ok(response) if response.is_success => {
                tracing::info!(
                    session_id = %session_id,
                    event = "otp_verified",
                    "Password changed successfully"
                );
                {
                    let mut session = self.lock_session();
                    session.mark_verified();
                }
                self.cancel_timer();
                self.navigator.select_tab(Screen::Login);
                Ok(())
            }
            Ok(_) => {
                tracing::warn!(
                    session_id = %session_id,
                    event = "otp_verify_rejected",
                    "Backend rejected the verification code"
                );
                Err(self.register_failed_attempt())
            }
            Err(e) => {
                // Same attempt and message policy as an explicit
                // rejection, but logged under its own event.
                tracing::error!(
                    session_id = %session_id,
                    event = "otp_verify_transport_error",
                    error = %e,
                    "Verification request failed"
                );
                Err(self.register_failed_attempt())
            }
        }
    }

    /// Reset the session for a fresh code
    ///
    /// Only permitted once the timer has run out, mirroring the
    /// disabled state of the resend control. Restores both budgets,
    /// clears the code and error and re-arms the timer. This is a
    /// local reset; no backend resend request is made.
    pub fn resend(&self) -> DomainResult<()> {
        {
            let mut session = self.lock_session();
            if !session.can_resend() {
                return Err(AuthError::ResendNotReady.into());
            }
            session.reset();
            tracing::info!(
                session_id = %session.id,
                event = "otp_session_reset",
                "Session reset for resend"
            );
        }
        self.start();
        Ok(())
    }

    /// Whether the OTP input should be rendered non-interactive
    pub fn is_input_disabled(&self) -> bool {
        self.lock_session().is_input_disabled()
    }

    /// Shared handle to the session, used by the countdown task
    pub fn session(&self) -> Arc<Mutex<OtpSession>> {
        Arc::clone(&self.session)
    }

    fn check_preconditions(&self, code: &str, new_password: &str) -> DomainResult<()> {
        if !validation::is_valid_otp_code(code) {
            return Err(AuthError::InvalidCodeFormat.into());
        }

        let session = self.lock_session();
        if session.attempts_remaining == 0 {
            return Err(AuthError::NoAttemptsRemaining.into());
        }
        if session.seconds_remaining == 0 {
            return Err(AuthError::CodeExpired.into());
        }
        drop(session);

        if !validation::meets_min_password_length(new_password, self.config.min_password_length) {
            return Err(AuthError::PasswordTooShort.into());
        }
        Ok(())
    }

    /// Consume one attempt and produce the user-facing error
    ///
    /// The timer keeps running through `Exhausted` so the resend
    /// control unlocks once the countdown reaches zero.
    fn register_failed_attempt(&self) -> DomainError {
        let mut session = self.lock_session();
        let remaining = session.fail_attempt();

        let error: DomainError = if remaining == 0 {
            AuthError::AttemptsExhausted.into()
        } else {
            AuthError::VerificationRejected { remaining }.into()
        };
        session.set_error(error.user_message());
        error
    }

    fn cancel_timer(&self) {
        if let Some(timer) = self.lock_timer().take() {
            timer.cancel();
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, OtpSession> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_timer(&self) -> MutexGuard<'_, Option<CountdownTimer>> {
        self.timer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
