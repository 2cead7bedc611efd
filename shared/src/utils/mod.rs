//! Utility functions shared across the flow crates

pub mod validation;
