//! Configuration system for the bring-up harness.
//!
//! This module defines all configuration structures and enums used to parameterize
//! a run. It provides:
//! 1. **Defaults:** Baseline deployment constants (bank count, reporting mode, watchdog).
//! 2. **Structures:** Hierarchical config for the harness, the accelerator backend and the LUT geometry.
//! 3. **Enums:** Load order, backend and evaluation model selection.
//!
//! Configuration is supplied as JSON (`lutsim run --config`) or use `Config::default()`.

use serde::Deserialize;

use crate::common::{Bank, BankCount};
use crate::lut::LutGeometry;

/// Default configuration constants for the harness.
mod defaults {
    /// Verbose reporting unless the deployment has no console.
    pub const VERBOSE: bool = true;

    /// Case A runs by default.
    pub const RUN_SINGLE_INPUT_CASE: bool = true;

    /// Case B runs by default.
    pub const RUN_TRIPLE_INPUT_CASE: bool = true;
}

/// Order in which configuration words are issued across banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum LoadOrder {
    /// Fully load one bank, then the next.
    Sequential,
    /// Alternate words across banks.
    ///
    /// Matches the dual-bank firmware. Order within a bank is preserved.
    #[default]
    Interleaved,
}

/// Accelerator backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum BackendKind {
    /// Software accelerator.
    #[default]
    Simulated,
    /// Custom instructions (riscv64 targets only).
    #[serde(alias = "RoCC", alias = "ROCC")]
    Rocc,
}

/// Evaluation model used by the simulated backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ModelKind {
    /// Answers from the golden vectors.
    #[default]
    Golden,
    /// Decompiles the loaded bitstream and runs the LUT core model.
    #[serde(alias = "Lut")]
    LutCore,
}

/// Root configuration structure.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use lutsim_core::config::Config;
///
/// let config = Config::default();
/// assert!(config.harness.verbose);
/// assert_eq!(config.harness.bank_count.get(), 2);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use lutsim_core::config::{Config, LoadOrder, ModelKind};
///
/// let json = r#"{
///     "harness": {
///         "bank_count": 1,
///         "verbose": false,
///         "load_order": "Sequential"
///     },
///     "accelerator": {
///         "model": "LutCore",
///         "watchdog_us": 500
///     },
///     "lut": {
///         "segment_bits": 3
///     }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.harness.bank_count.get(), 1);
/// assert!(!config.harness.verbose);
/// assert_eq!(config.harness.load_order, LoadOrder::Sequential);
/// assert_eq!(config.accelerator.model, ModelKind::LutCore);
/// assert_eq!(config.lut.segment_bits, 3);
/// assert_eq!(config.lut.selector_bits, 4);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Test sequence settings.
    #[serde(default)]
    pub harness: HarnessConfig,
    /// Backend selection.
    #[serde(default)]
    pub accelerator: AcceleratorConfig,
    /// LUT core geometry (simulated backend and data generation).
    #[serde(default)]
    pub lut: LutGeometry,
}

/// Deployment parameters of the test sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HarnessConfig {
    /// Banks configured and exercised.
    #[serde(default)]
    pub bank_count: BankCount,

    /// Verbose text reporting; `false` selects silent mode (fatal signal only).
    #[serde(default = "HarnessConfig::default_verbose")]
    pub verbose: bool,

    /// Run case A (`lute`).
    #[serde(default = "HarnessConfig::default_run_single_input_case")]
    pub run_single_input_case: bool,

    /// Run case B (`lute3`).
    #[serde(default = "HarnessConfig::default_run_triple_input_case")]
    pub run_triple_input_case: bool,

    /// Cross-bank load order.
    #[serde(default)]
    pub load_order: LoadOrder,
}

impl HarnessConfig {
    fn default_verbose() -> bool {
        defaults::VERBOSE
    }

    fn default_run_single_input_case() -> bool {
        defaults::RUN_SINGLE_INPUT_CASE
    }

    fn default_run_triple_input_case() -> bool {
        defaults::RUN_TRIPLE_INPUT_CASE
    }

    /// Bank evaluated by case A: bank 1 with two banks, otherwise bank 0.
    pub const fn single_input_bank(&self) -> Bank {
        match self.bank_count {
            BankCount::One => Bank::Bank0,
            BankCount::Two => Bank::Bank1,
        }
    }

    /// Bank evaluated by case B.
    pub const fn triple_input_bank(&self) -> Bank {
        Bank::Bank0
    }

    /// Banks configured in this deployment.
    pub fn banks(&self) -> &'static [Bank] {
        self.bank_count.banks()
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            bank_count: BankCount::default(),
            verbose: defaults::VERBOSE,
            run_single_input_case: defaults::RUN_SINGLE_INPUT_CASE,
            run_triple_input_case: defaults::RUN_TRIPLE_INPUT_CASE,
            load_order: LoadOrder::default(),
        }
    }
}

/// Backend selection and wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct AcceleratorConfig {
    /// Backend issuing the operations.
    #[serde(default)]
    pub backend: BackendKind,

    /// Per-call latency budget in microseconds; `None` disables the watchdog.
    #[serde(default)]
    pub watchdog_us: Option<u64>,

    /// Evaluation model of the simulated backend.
    #[serde(default)]
    pub model: ModelKind,
}
