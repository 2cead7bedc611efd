//! Type definitions shared across the flow crates
//!
//! - `identifier` - classification of free-form user identifiers
//! - `response` - collaborator response shapes

pub mod identifier;
pub mod response;

// Re-export commonly used types at module level
pub use identifier::IdentifierKind;
pub use response::{RegisterResponse, VerifyOtpResponse};
