//! Shared test infrastructure.


/// Mock accelerator backends.
pub mod mocks;
