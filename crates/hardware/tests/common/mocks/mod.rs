//! Mock implementations of the harness seams.

/// Mock `Accelerator` backend.
pub mod accelerator;
