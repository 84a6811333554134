//! Application layer combining the checksum and classification steps.
//!
//! This module defines the `ValidationEngine` which acts as the primary entry
//! point for validating raw card number input against a policy.

pub mod engine;
