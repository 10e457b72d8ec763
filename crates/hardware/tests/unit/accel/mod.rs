//! Accelerator backend tests.

/// Unit tests for the evaluation models.
pub mod model;

/// Unit tests for per-bank call ordering.
///
/// This module drives `Sequenced` over both the simulated backend and a mock,
/// checking that rejected calls never reach the wrapped backend.
pub mod sequencer;

/// Unit tests for the software accelerator.
pub mod simulated;

/// Unit tests for the latency budget wrapper.
pub mod watchdog;
