//! Evaluation models for the simulated accelerator.
//!
//! A model maps the words loaded into a bank, plus the evaluate operands, to a
//! result. The harness treats the LUT function as a black box; these models exist
//! so the simulator can stand in for hardware in tests and host runs.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::common::ConfigWord;
use crate::data::TestData;
use crate::lut::{LutCore, LutGeometry};

/// Function computed by a simulated bank.
pub trait EvalModel: fmt::Debug {
    /// Single-input evaluate against the loaded `config`.
    fn evaluate(&self, config: &[ConfigWord], input: u64) -> u64;

    /// Triple-input evaluate against the loaded `config`.
    fn evaluate3(&self, config: &[ConfigWord], inputs: [u64; 3]) -> u64;
}

/// Answers from the golden vectors. Unknown inputs evaluate to zero.
#[derive(Debug, Clone, Default)]
pub struct GoldenModel {
    single: HashMap<u64, u64>,
    triple: HashMap<[u64; 3], u64>,
}

impl GoldenModel {
    /// Builds lookup tables from both vector sets of `data`.
    pub fn new(data: &TestData) -> Self {
        Self {
            single: data.single.iter().collect(),
            triple: data.triple.iter().collect(),
        }
    }
}

impl EvalModel for GoldenModel {
    fn evaluate(&self, _config: &[ConfigWord], input: u64) -> u64 {
        self.single.get(&input).copied().unwrap_or(0)
    }

    fn evaluate3(&self, _config: &[ConfigWord], inputs: [u64; 3]) -> u64 {
        self.triple.get(&inputs).copied().unwrap_or(0)
    }
}

type ModelFn = dyn Fn(&[ConfigWord], &[u64]) -> u64 + Send + Sync;

/// Arbitrary closure over `(config, operands)`.
///
/// `evaluate` passes one operand, `evaluate3` three.
pub struct FnModel {
    f: Box<ModelFn>,
}

impl FnModel {
    /// Wraps `f`.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[ConfigWord], &[u64]) -> u64 + Send + Sync + 'static,
    {
        Self { f: Box::new(f) }
    }

    /// Model returning `value` for every input.
    pub fn constant(value: u64) -> Self {
        Self::new(move |_, _| value)
    }
}

impl fmt::Debug for FnModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnModel").finish_non_exhaustive()
    }
}

impl EvalModel for FnModel {
    fn evaluate(&self, config: &[ConfigWord], input: u64) -> u64 {
        (self.f)(config, &[input])
    }

    fn evaluate3(&self, config: &[ConfigWord], inputs: [u64; 3]) -> u64 {
        (self.f)(config, &inputs)
    }
}

/// Decompiles the loaded bitstream and runs the LUT core pipeline.
///
/// A bitstream that does not fit the geometry evaluates to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LutCoreModel {
    geometry: LutGeometry,
}

impl LutCoreModel {
    /// Model for cores of `geometry`.
    pub const fn new(geometry: LutGeometry) -> Self {
        Self { geometry }
    }

    fn core(&self, config: &[ConfigWord]) -> Option<LutCore> {
        match LutCore::from_bitstream(self.geometry, config) {
            Ok(core) => Some(core),
            Err(e) => {
                warn!(error = %e, "loaded bitstream does not decompile");
                None
            }
        }
    }
}

impl EvalModel for LutCoreModel {
    fn evaluate(&self, config: &[ConfigWord], input: u64) -> u64 {
        self.core(config).map_or(0, |core| core.evaluate(input))
    }

    fn evaluate3(&self, config: &[ConfigWord], inputs: [u64; 3]) -> u64 {
        let [a, b, c] = inputs;
        self.core(config).map_or(0, |core| core.evaluate3(a, b, c))
    }
}
