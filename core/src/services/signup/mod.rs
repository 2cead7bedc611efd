//! Sign-up service for the registration screen
//!
//! Stateless validate-then-call flow: form checks run locally in
//! screen order, then registration is delegated to the backend. On
//! success the handoff is written to the flow context and the shell is
//! asked to show the OTP screen.

mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use service::SignupService;
pub use traits::RegisterClient;
pub use types::SignupForm;
