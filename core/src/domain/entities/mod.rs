//! Domain entities representing authentication flow state.

pub mod flow_state;
pub mod otp_session;

// Re-export commonly used types
pub use flow_state::{AuthFlowContext, OtpHandoff};
pub use otp_session::{
    OtpSession, OtpStatus,
    CODE_LENGTH, INITIAL_SECONDS, MAX_ATTEMPTS, MIN_PASSWORD_LENGTH,
};
