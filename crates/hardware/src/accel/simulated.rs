//! Software accelerator.
//!
//! Models each bank as a register file of fixed capacity plus a status register,
//! mirroring the hardware's reaction to protocol violations instead of rejecting
//! them: loads past the register file set `e_invalid_cfg`, evaluates before the
//! register file is full set `e_premature_exe` and return zero. Until the first
//! reset, status reads the power-on sentinel.
//!
//! Every issued operation is appended to an operation log for inspection.

use tracing::warn;

use crate::accel::model::{EvalModel, GoldenModel};
use crate::accel::{AccelOp, Accelerator, BackendType};
use crate::common::constants::{POWER_ON_STATUS, STATUS_E_INVALID_CFG, STATUS_E_PREMATURE_EXE};
use crate::common::{AccelError, Bank, ConfigWord, StatusWord};
use crate::data::TestData;

#[derive(Debug, Default)]
struct SimBank {
    capacity: usize,
    words: Vec<ConfigWord>,
    flags: u64,
    powered_on: bool,
    model: Option<Box<dyn EvalModel>>,
}

impl SimBank {
    fn is_full(&self) -> bool {
        self.powered_on && self.words.len() == self.capacity
    }

    fn status(&self) -> StatusWord {
        if !self.powered_on {
            return StatusWord(POWER_ON_STATUS);
        }
        StatusWord::from_parts(self.flags, self.words.len() as u64)
    }
}

/// Software stand-in for the LUT accelerator.
#[derive(Debug, Default)]
pub struct SimulatedAccelerator {
    banks: [SimBank; 2],
    ops: Vec<AccelOp>,
}

impl SimulatedAccelerator {
    /// Accelerator with both banks at zero capacity and no model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures `bank` with a register file of `capacity` words evaluated by `model`.
    #[must_use]
    pub fn with_bank<M>(mut self, bank: Bank, capacity: usize, model: M) -> Self
    where
        M: EvalModel + 'static,
    {
        let b = &mut self.banks[bank.index()];
        b.capacity = capacity;
        b.model = Some(Box::new(model));
        self
    }

    /// Sizes every bank present in `data` to its bitstream and answers from its golden vectors.
    pub fn golden(data: &TestData) -> Self {
        let model = GoldenModel::new(data);
        Bank::ALL.iter().fold(Self::new(), |sim, &bank| {
            match data.bitstreams.get(bank) {
                Some(bitstream) => sim.with_bank(bank, bitstream.len(), model.clone()),
                None => sim,
            }
        })
    }

    /// Operations issued so far, in order.
    pub fn ops(&self) -> &[AccelOp] {
        &self.ops
    }

    /// Forgets the operation log.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Words currently held by `bank`.
    pub fn words(&self, bank: Bank) -> &[ConfigWord] {
        &self.banks[bank.index()].words
    }

    /// Register file capacity of `bank`.
    pub const fn capacity(&self, bank: Bank) -> usize {
        self.banks[bank.index()].capacity
    }

    fn run(
        &mut self,
        bank: Bank,
        op: AccelOp,
        eval: impl FnOnce(&dyn EvalModel, &[ConfigWord]) -> u64,
    ) -> u64 {
        self.ops.push(op);
        let b = &mut self.banks[bank.index()];
        if !b.is_full() {
            warn!(
                %bank,
                loaded = b.words.len(),
                capacity = b.capacity,
                "evaluate before configuration completed"
            );
            b.flags |= STATUS_E_PREMATURE_EXE;
            return 0;
        }
        b.model.as_deref().map_or(0, |m| eval(m, &b.words))
    }
}

impl Accelerator for SimulatedAccelerator {
    fn backend_type(&self) -> BackendType {
        BackendType::Simulated
    }

    fn reset(&mut self, bank: Bank) -> Result<(), AccelError> {
        self.ops.push(AccelOp::Reset(bank));
        let b = &mut self.banks[bank.index()];
        b.words.clear();
        b.flags = 0;
        b.powered_on = true;
        Ok(())
    }

    fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError> {
        self.ops.push(AccelOp::Load(bank, word));
        let b = &mut self.banks[bank.index()];
        if b.words.len() >= b.capacity {
            warn!(%bank, capacity = b.capacity, "configuration word past register file");
            b.flags |= STATUS_E_INVALID_CFG;
        } else {
            b.words.push(word);
        }
        Ok(())
    }

    fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError> {
        Ok(self.run(bank, AccelOp::Evaluate(bank, input), |m, cfg| {
            m.evaluate(cfg, input)
        }))
    }

    fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError> {
        let inputs = [a, b, c];
        Ok(self.run(bank, AccelOp::Evaluate3(bank, inputs), |m, cfg| {
            m.evaluate3(cfg, inputs)
        }))
    }

    fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError> {
        self.ops.push(AccelOp::Status(bank));
        Ok(self.banks[bank.index()].status())
    }
}
