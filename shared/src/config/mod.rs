//! Configuration module for the authentication flow
//!
//! - `flow` - budgets and limits for the OTP verification session

pub mod flow;

pub use flow::AuthFlowConfig;
