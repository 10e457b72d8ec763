//! Test case execution.
//!
//! Case A issues one `evaluate` per single-input vector, case B one `evaluate3`
//! per input triple. Each result goes straight to the verifier; a mismatch never
//! stops the case.

use tracing::debug;

use crate::accel::Accelerator;
use crate::common::{AccelError, Bank, CaseId, CaseInput};
use crate::data::{SingleInputVectors, TripleInputVectors};
use crate::harness::verifier::{CheckContext, ResultVerifier};

/// Runs the evaluation cases against fixed banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestExecutor {
    single_bank: Bank,
    triple_bank: Bank,
}

impl TestExecutor {
    /// Executor evaluating case A on `single_bank` and case B on `triple_bank`.
    pub const fn new(single_bank: Bank, triple_bank: Bank) -> Self {
        Self {
            single_bank,
            triple_bank,
        }
    }

    /// Bank used by case A.
    pub const fn single_bank(&self) -> Bank {
        self.single_bank
    }

    /// Bank used by case B.
    pub const fn triple_bank(&self) -> Bank {
        self.triple_bank
    }

    /// Case A: `evaluate(bank, input[i])` for every `i`.
    ///
    /// # Errors
    ///
    /// Propagates accelerator errors; mismatches are not errors.
    pub fn run_single<A: Accelerator + ?Sized>(
        &self,
        accel: &mut A,
        vectors: &SingleInputVectors,
        verifier: &mut ResultVerifier<'_>,
    ) -> Result<(), AccelError> {
        debug!(bank = %self.single_bank, vectors = vectors.len(), "case A");
        for (index, (input, expected)) in vectors.iter().enumerate() {
            let actual = accel.evaluate(self.single_bank, input)?;
            let context = CheckContext {
                index,
                input: CaseInput::Single(input),
            };
            let _ = verifier.check(CaseId::A, actual, expected, context);
        }
        Ok(())
    }

    /// Case B: `evaluate3(bank, a[i], b[i], c[i])` for every `i`.
    ///
    /// # Errors
    ///
    /// Propagates accelerator errors; mismatches are not errors.
    pub fn run_triple<A: Accelerator + ?Sized>(
        &self,
        accel: &mut A,
        vectors: &TripleInputVectors,
        verifier: &mut ResultVerifier<'_>,
    ) -> Result<(), AccelError> {
        debug!(bank = %self.triple_bank, vectors = vectors.len(), "case B");
        for (index, (inputs, expected)) in vectors.iter().enumerate() {
            let [a, b, c] = inputs;
            let actual = accel.evaluate3(self.triple_bank, a, b, c)?;
            let context = CheckContext {
                index,
                input: CaseInput::Triple(inputs),
            };
            let _ = verifier.check(CaseId::B, actual, expected, context);
        }
        Ok(())
    }
}
