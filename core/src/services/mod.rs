//! Flow services containing screen logic and collaborator seams.

pub mod navigation;
pub mod otp;
pub mod signup;

// Re-export commonly used types
pub use navigation::Navigator;
pub use otp::{CountdownTimer, OtpService, OtpSessionConfig, VerifyOtpClient};
pub use signup::{RegisterClient, SignupForm, SignupService};
