//! Shared utilities and common types for the authentication flow
//!
//! This crate provides functionality used across the flow crates:
//! - Flow configuration (budgets for the OTP session)
//! - Collaborator response shapes
//! - Identifier classification (email vs. mobile)
//! - Input validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::AuthFlowConfig;
pub use types::{IdentifierKind, RegisterResponse, VerifyOtpResponse};
pub use utils::validation;
