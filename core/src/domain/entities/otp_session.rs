//! OTP verification session entity for the password-reset flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts per session
pub const MAX_ATTEMPTS: u32 = 3;

/// Length of the OTP code
pub const CODE_LENGTH: usize = 6;

/// Initial time budget for a session (2 minutes)
pub const INITIAL_SECONDS: u32 = 120;

/// Minimum length of the new password
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Lifecycle status of an OTP verification session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OtpStatus {
    /// Time and attempts remain; input is interactive
    Active,
    /// The time budget reached zero before verification
    Expired,
    /// The attempt budget reached zero
    Exhausted,
    /// The collaborator accepted the code
    Verified,
}

impl OtpStatus {
    /// Whether the session has reached a terminal state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, OtpStatus::Active)
    }
}

/// Transient state for one OTP verification attempt sequence
///
/// Created when the verification screen mounts, re-created by resend,
/// and dropped when the user navigates away. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpSession {
    /// Session identifier for log correlation
    pub id: Uuid,

    /// The code entered so far (digits only, at most 6)
    pub code: String,

    /// Verification attempts left before lockout
    pub attempts_remaining: u32,

    /// Seconds left before the code expires
    pub seconds_remaining: u32,

    /// Current lifecycle status
    pub status: OtpStatus,

    /// User-facing error from the last failed submit, if any
    pub last_error: Option<String>,

    /// Timestamp when the session was (re)created
    pub created_at: DateTime<Utc>,
}

impl OtpSession {
    /// Create a fresh session with full budgets
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            code: String::new(),
            attempts_remaining: MAX_ATTEMPTS,
            seconds_remaining: INITIAL_SECONDS,
            status: OtpStatus::Active,
            last_error: None,
            created_at: Utc::now(),
        }
    }

    /// Create a session with custom budgets
    pub fn with_budgets(max_attempts: u32, initial_seconds: u32) -> Self {
        Self {
            attempts_remaining: max_attempts,
            seconds_remaining: initial_seconds,
            ..Self::new()
        }
    }

    /// Record a user edit to the code field
    ///
    /// Keeps only ASCII digits, truncates at [`CODE_LENGTH`], and clears
    /// the last error. Edits to the password field do not go through
    /// here and therefore do not clear the error.
    pub fn set_code(&mut self, input: &str) {
        self.code = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CODE_LENGTH)
            .collect();
        self.last_error = None;
    }

    /// Advance the countdown by one second
    ///
    /// Decrements `seconds_remaining`. Reaching zero while still
    /// unverified transitions an `Active` session to `Expired`. The
    /// countdown keeps running through `Exhausted` so the resend
    /// control (gated on the timer reaching zero) eventually unlocks.
    ///
    /// # Returns
    ///
    /// `true` if the timer should keep ticking, `false` once the
    /// session is verified, expired, or the budget is spent.
    pub fn tick(&mut self) -> bool {
        if matches!(self.status, OtpStatus::Verified | OtpStatus::Expired)
            || self.seconds_remaining == 0
        {
            return false;
        }

        self.seconds_remaining -= 1;
        if self.seconds_remaining == 0 {
            if self.status == OtpStatus::Active {
                self.status = OtpStatus::Expired;
            }
            return false;
        }
        true
    }

    /// Record a failed verification attempt
    ///
    /// Decrements the attempt budget (floor 0). Reaching zero
    /// transitions the session to `Exhausted`.
    ///
    /// # Returns
    ///
    /// The number of attempts remaining after the decrement.
    pub fn fail_attempt(&mut self) -> u32 {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.status = OtpStatus::Exhausted;
        }
        self.attempts_remaining
    }

    /// Mark the session as successfully verified
    pub fn mark_verified(&mut self) {
        self.status = OtpStatus::Verified;
        self.last_error = None;
    }

    /// Record the user-facing message of a failed submit
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    /// Reset to full budgets with a cleared code and error
    ///
    /// This is the resend semantics: the session id changes so log
    /// events for the new code are distinguishable from the old one.
    pub fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.code.clear();
        self.attempts_remaining = MAX_ATTEMPTS;
        self.seconds_remaining = INITIAL_SECONDS;
        self.status = OtpStatus::Active;
        self.last_error = None;
        self.created_at = Utc::now();
    }

    /// Whether the OTP input should be rendered non-interactive
    pub fn is_input_disabled(&self) -> bool {
        self.attempts_remaining == 0 || self.seconds_remaining == 0
    }

    /// Whether resend is allowed (only once the timer has run out)
    pub fn can_resend(&self) -> bool {
        self.seconds_remaining == 0
    }

    /// Format the remaining time as `M:SS` for display
    pub fn format_time_remaining(&self) -> String {
        let mins = self.seconds_remaining / 60;
        let secs = self.seconds_remaining % 60;
        format!("{}:{:02}", mins, secs)
    }
}

impl Default for OtpSession {
    fn default() -> Self {
        Self::new()
    }
}
