//! # AuthFlow Core
//!
//! Core domain and services for the consumer authentication flow.
//! This crate contains the OTP verification session, the sign-up
//! service, collaborator traits toward the backend, and the error
//! types shared by both screens.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
