//! Accelerator interface and backends.
//!
//! This module abstracts the three hardware operations of the LUT accelerator. It provides:
//! 1. **Interface:** The `Accelerator` trait (`reset`, `load`, `evaluate`, `evaluate3`, `status`).
//! 2. **Backends:** `SimulatedAccelerator` for hosts and `RoccAccelerator` on riscv64 targets.
//! 3. **Wrappers:** `Sequenced` enforces the per-bank call ordering; `Watchdog` bounds latency.
//! 4. **Models:** Evaluation functions backing the simulated accelerator.
//!
//! Every operation is synchronous, never cached or reordered, and acts as a full barrier.

use std::fmt;

use crate::common::{AccelError, Bank, ConfigWord, StatusWord};

/// Evaluation models for the simulated backend.
pub mod model;
/// Direct custom-instruction backend.
#[cfg(target_arch = "riscv64")]
pub mod rocc;
/// Call-ordering enforcement.
pub mod sequencer;
/// Software accelerator.
pub mod simulated;
/// Per-bank protocol state.
pub mod state;
/// Latency budget wrapper.
pub mod watchdog;

pub use model::{EvalModel, FnModel, GoldenModel, LutCoreModel};
#[cfg(target_arch = "riscv64")]
pub use rocc::RoccAccelerator;
pub use sequencer::Sequenced;
pub use simulated::SimulatedAccelerator;
pub use state::BankState;
pub use watchdog::Watchdog;

/// Hardware operations of the LUT accelerator.
///
/// Implementations must issue every call exactly once, in program order.
pub trait Accelerator: fmt::Debug {
    /// Identifies the backend for logging.
    fn backend_type(&self) -> BackendType;

    /// Forces `bank` to an empty configuration state.
    ///
    /// # Errors
    ///
    /// Returns an error if the call violates the protocol or the backend fails.
    fn reset(&mut self, bank: Bank) -> Result<(), AccelError>;

    /// Appends one configuration word to `bank`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call violates the protocol or the backend fails.
    fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError>;

    /// Evaluates the single-input function of `bank`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call violates the protocol or the backend fails.
    fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError>;

    /// Evaluates the three-input function of `bank`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call violates the protocol or the backend fails.
    fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError>;

    /// Reads the status register of `bank`. Valid at any time.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError>;
}

impl<A: Accelerator + ?Sized> Accelerator for Box<A> {
    fn backend_type(&self) -> BackendType {
        (**self).backend_type()
    }

    fn reset(&mut self, bank: Bank) -> Result<(), AccelError> {
        (**self).reset(bank)
    }

    fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError> {
        (**self).load(bank, word)
    }

    fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError> {
        (**self).evaluate(bank, input)
    }

    fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError> {
        (**self).evaluate3(bank, a, b, c)
    }

    fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError> {
        (**self).status(bank)
    }
}

/// Backend type identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    /// Software accelerator.
    Simulated,
    /// Custom instructions issued to the RoCC accelerator.
    Rocc,
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simulated => write!(f, "Simulated"),
            Self::Rocc => write!(f, "RoCC"),
        }
    }
}

/// One accelerator operation as issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccelOp {
    /// `reset(bank)`.
    Reset(Bank),
    /// `load(bank, word)`.
    Load(Bank, ConfigWord),
    /// `evaluate(bank, input)`.
    Evaluate(Bank, u64),
    /// `evaluate3(bank, a, b, c)`.
    Evaluate3(Bank, [u64; 3]),
    /// `status(bank)`.
    Status(Bank),
}

impl AccelOp {
    /// Bank addressed by the operation.
    pub const fn bank(&self) -> Bank {
        match *self {
            Self::Reset(b)
            | Self::Load(b, _)
            | Self::Evaluate(b, _)
            | Self::Evaluate3(b, _)
            | Self::Status(b) => b,
        }
    }

    /// Operation name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reset(_) => "reset",
            Self::Load(..) => "load",
            Self::Evaluate(..) => "evaluate",
            Self::Evaluate3(..) => "evaluate3",
            Self::Status(_) => "status",
        }
    }
}
