//! Tests for the OTP verification service

#[cfg(test)]
mod timer_tests;
