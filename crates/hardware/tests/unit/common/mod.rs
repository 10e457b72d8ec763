//! Common component tests.
//!
//! This module contains unit tests for the fundamental harness types.

/// Unit tests for bank identifiers and bank counts.
pub mod bank;

/// Unit tests for case inputs and error display.
pub mod error;

/// Unit tests for status word decoding.
///
/// This module verifies the flag accessors, the applied-word counter, and the
/// power-on sentinel.
pub mod status_word;
