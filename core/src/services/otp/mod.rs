//! OTP verification service for the password-reset screen
//!
//! This module provides the complete verification session workflow:
//! - Countdown timer with lifecycle-bound cancellation
//! - Attempt budget tracking with local precondition checks
//! - Delegation to the backend verification collaborator
//! - Resend as a local session reset

mod config;
mod service;
mod timer;
mod traits;

#[cfg(test)]
mod tests;

pub use config::OtpSessionConfig;
pub use service::OtpService;
pub use timer::CountdownTimer;
pub use traits::VerifyOtpClient;
