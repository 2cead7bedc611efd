//! Error types for the sign-up and OTP verification screens
//!
//! The display strings are the literal texts the screens surface, so
//! services can record them verbatim as the session's last error.

use thiserror::Error;

/// OTP verification errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Please enter a valid 6-digit OTP")]
    InvalidCodeFormat,

    #[error("No attempts left. Please request a new OTP.")]
    NoAttemptsRemaining,

    #[error("OTP has expired. Please request a new OTP.")]
    CodeExpired,

    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,

    #[error("No user ID found. Please try again.")]
    MissingUserId,

    #[error("Invalid OTP. {remaining} attempt(s) left.")]
    VerificationRejected { remaining: u32 },

    #[error("No attempts left. OTP verification failed.")]
    AttemptsExhausted,

    #[error("Error verifying OTP. Please try again.")]
    VerificationUnavailable,

    #[error("Resend is not available until the current OTP expires")]
    ResendNotReady,
}

/// Sign-up form validation and registration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Please accept the terms and conditions")]
    TermsNotAccepted,

    #[error("Please enter a valid email or 10-digit mobile number")]
    UnrecognizedIdentifier,

    #[error("{message}")]
    RegistrationRejected {
        message: String,
        /// Additional detail the backend wants shown prominently
        detail: Option<String>,
    },

    #[error("Registration failed. Please try again.")]
    RegistrationUnavailable,
}
