//! Common types shared by every harness component.
//!
//! This module provides the fundamental building blocks of the harness. It includes:
//! 1. **Banks:** Identifiers for the accelerator's configuration slots.
//! 2. **Words:** Configuration and status word types.
//! 3. **Cases:** Test case identifiers and their originating inputs.
//! 4. **Constants:** Status register layout, sentinels, and protocol markers.
//! 5. **Error Handling:** Protocol, data, verification, and run-level errors.

/// Bank identifiers and bank counts.
pub mod bank;

/// Test case identifiers.
pub mod case;

/// Harness-wide constants.
pub mod constants;

/// Error types and the fatal signal.
pub mod error;

/// Configuration and status words.
pub mod word;

pub use bank::{Bank, BankCount};
pub use case::{CaseId, CaseInput};
pub use error::{
    AccelError, ConfigurationError, DataError, FatalSignal, HarnessError, LutError, MismatchError,
};
pub use word::{ConfigWord, StatusWord};
