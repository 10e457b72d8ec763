//! Error and signal types.
//!
//! This module defines every failure the harness can observe. It provides:
//! 1. **Protocol Violations:** `ConfigurationError` for out-of-order or miscounted accelerator calls.
//! 2. **Backend Failures:** `AccelError` wrapping protocol violations and watchdog overruns.
//! 3. **Verification Events:** `MismatchError` and the silent-mode `FatalSignal`.
//! 4. **Data and Model Errors:** `DataError` for malformed test data, `LutError` for LUT core models.
//! 5. **Run Failures:** `HarnessError`, the only error a run as a whole returns.

use std::fmt;

use thiserror::Error;

use super::bank::Bank;
use super::case::{CaseId, CaseInput};
use super::constants::FATAL_TRAP_CODE;

/// Violation of the per-bank call ordering contract.
///
/// These are programming or integration errors: a correct harness driven by validated
/// data never produces one.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `load` issued to a bank that was not reset in this run.
    #[error("bank {bank}: load issued before reset")]
    LoadBeforeReset {
        /// Offending bank.
        bank: Bank,
    },

    /// More words issued than the bank's bitstream holds.
    #[error("bank {bank}: word {index} exceeds bitstream length {expected}")]
    TooManyWords {
        /// Offending bank.
        bank: Bank,
        /// Zero-based index of the rejected word.
        index: usize,
        /// Bitstream length for the bank.
        expected: usize,
    },

    /// `evaluate` issued before every configuration word was loaded.
    #[error("bank {bank}: evaluate with {loaded}/{expected} words loaded")]
    NotLoaded {
        /// Offending bank.
        bank: Bank,
        /// Words loaded since the last reset.
        loaded: usize,
        /// Bitstream length for the bank.
        expected: usize,
    },

    /// The bank has no bitstream in this deployment.
    #[error("bank {bank}: no bitstream configured")]
    UnknownBank {
        /// Offending bank.
        bank: Bank,
    },
}

/// Failure of an accelerator operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccelError {
    /// Call ordering contract violated.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A call exceeded the watchdog latency budget.
    #[error("{op} on bank {bank} took {elapsed_us}us (budget {budget_us}us)")]
    Timeout {
        /// Operation name (`reset`, `load`, `evaluate`, `evaluate3`, `status`).
        op: &'static str,
        /// Bank the operation addressed.
        bank: Bank,
        /// Observed latency in microseconds.
        elapsed_us: u64,
        /// Configured budget in microseconds.
        budget_us: u64,
    },
}

/// An evaluate result that differs from its golden value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("case {case} #{index}: {actual:#018x} (phys) != {expected:#018x} (exp) @ {input}")]
pub struct MismatchError {
    /// Case that produced the result.
    pub case: CaseId,
    /// Position in the vector set.
    pub index: usize,
    /// Value returned by the accelerator.
    pub actual: u64,
    /// Golden value.
    pub expected: u64,
    /// Operands that produced `actual`.
    pub input: CaseInput,
}

/// Externally observable failure indicator raised in silent mode.
///
/// Distinct from a normal error report: it carries no text, only the trap code a
/// supervising harness watches for, plus the position that triggered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FatalSignal {
    /// Trap code written to the signal channel.
    pub code: u64,
    /// Case that raised the signal.
    pub case: CaseId,
    /// Position in the vector set.
    pub index: usize,
}

impl FatalSignal {
    /// Signal for a mismatch.
    pub const fn for_mismatch(mismatch: &MismatchError) -> Self {
        Self {
            code: FATAL_TRAP_CODE,
            case: mismatch.case,
            index: mismatch.index,
        }
    }
}

impl fmt::Display for FatalSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fatal {:#x} (case {} #{})", self.code, self.case, self.index)
    }
}

/// Malformed test data or deployment parameters.
#[derive(Debug, Error)]
pub enum DataError {
    /// Parallel vectors of a case have different lengths.
    #[error("case {case}: {what} has {len} entries, expected {expected}")]
    LengthMismatch {
        /// Case whose vectors disagree.
        case: CaseId,
        /// Name of the offending vector.
        what: &'static str,
        /// Its length.
        len: usize,
        /// Length of the reference input vector.
        expected: usize,
    },

    /// A bitstream holds no words.
    #[error("bank {0}: bitstream is empty")]
    EmptyBitstream(Bank),

    /// A bitstream does not match the accelerator register count.
    #[error("bank {bank}: bitstream has {len} words, accelerator expects {expected}")]
    BitstreamLength {
        /// Offending bank.
        bank: Bank,
        /// Words supplied.
        len: usize,
        /// Register file size.
        expected: usize,
    },

    /// Bank index outside 0..=1.
    #[error("invalid bank index {0}")]
    InvalidBank(usize),

    /// Bank count outside 1..=2.
    #[error("invalid bank count {0} (expected 1 or 2)")]
    InvalidBankCount(usize),

    /// A LUT core could not be built or compiled.
    #[error("LUT core: {0}")]
    Lut(#[from] LutError),

    /// Test data could not be parsed.
    #[error("malformed test data: {0}")]
    Json(#[from] serde_json::Error),

    /// Test data could not be read or written.
    #[error("test data I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid LUT core geometry, term set or bitstream.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LutError {
    /// A geometry parameter is out of the supported range.
    #[error("invalid geometry: {0}")]
    Geometry(String),

    /// Bitstream length does not match the geometry.
    #[error("bitstream has {len} words, geometry requires {expected}")]
    BitstreamLength {
        /// Words supplied.
        len: usize,
        /// Register count of the geometry.
        expected: usize,
    },

    /// The address translator has more sum terms than output bits.
    #[error("cannot represent PLA: {outputs} output bits, {max} available")]
    TooManyOutputs {
        /// Requested outputs.
        outputs: usize,
        /// Segment bits of the geometry.
        max: usize,
    },

    /// The address translator needs more distinct products than interconnects.
    #[error("cannot represent PLA: {products} products, {max} interconnects")]
    TooManyProducts {
        /// Distinct products required.
        products: usize,
        /// Interconnects of the geometry.
        max: usize,
    },

    /// A product term string could not be parsed.
    #[error("invalid product term {term:?}: {reason}")]
    Product {
        /// The offending term.
        term: String,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An input decoder choice references a bit outside the input word.
    #[error("input decoder choice {choice} outside {width}-bit input")]
    Choice {
        /// Requested input bit.
        choice: u32,
        /// Input width in bits.
        width: u32,
    },
}

/// Failure of a harness run as a whole.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// An accelerator operation failed.
    #[error("accelerator: {0}")]
    Accel(#[from] AccelError),

    /// Test data is inconsistent with the deployment.
    #[error("test data: {0}")]
    Data(#[from] DataError),

    /// A bank required by the configuration has no bitstream.
    #[error("bank {0} is active but has no bitstream")]
    MissingBitstream(Bank),
}
