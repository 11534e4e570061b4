//! Shared test infrastructure.

/// Test context and log capture.
pub mod harness;
