//! Tests for the sign-up service

#[cfg(test)]
mod mocks;
