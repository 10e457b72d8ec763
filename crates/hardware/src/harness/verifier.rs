//! Result verification.
//!
//! Every result is compared bit-exactly against its golden value as soon as it
//! is produced. A mismatch is recorded and reported, never fatal: the verifier
//! visits every vector of a case.

use serde::Serialize;

use crate::common::{CaseId, CaseInput, MismatchError};
use crate::harness::report::ErrorSink;

/// Check and mismatch counts of one case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CaseTally {
    /// Results compared.
    pub checks: usize,
    /// Results that differed from their golden value.
    pub mismatches: usize,
}

/// Outcome of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Verdict {
    failed: bool,
    cases: [CaseTally; 2],
}

impl Verdict {
    /// Fresh verdict: nothing checked, nothing failed.
    pub const fn new() -> Self {
        Self {
            failed: false,
            cases: [CaseTally {
                checks: 0,
                mismatches: 0,
            }; 2],
        }
    }

    /// True if any mismatch was observed.
    pub const fn failed(&self) -> bool {
        self.failed
    }

    /// True if no mismatch was observed.
    pub const fn passed(&self) -> bool {
        !self.failed
    }

    /// Tally of `case`.
    pub const fn case(&self, case: CaseId) -> CaseTally {
        self.cases[case_index(case)]
    }

    /// Results compared across both cases.
    pub const fn total_checks(&self) -> usize {
        self.cases[0].checks + self.cases[1].checks
    }

    /// Mismatches across both cases.
    pub const fn total_mismatches(&self) -> usize {
        self.cases[0].mismatches + self.cases[1].mismatches
    }

    fn record(&mut self, case: CaseId, matched: bool) {
        let tally = &mut self.cases[case_index(case)];
        tally.checks += 1;
        if !matched {
            tally.mismatches += 1;
            self.failed = true;
        }
    }
}

const fn case_index(case: CaseId) -> usize {
    match case {
        CaseId::A => 0,
        CaseId::B => 1,
    }
}

/// Position and operands of the result under check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckContext {
    /// Position in the vector set.
    pub index: usize,
    /// Operands that produced the result.
    pub input: CaseInput,
}

/// Compares results, accumulates the verdict and reports mismatches.
#[derive(Debug)]
pub struct ResultVerifier<'s> {
    verdict: Verdict,
    sink: &'s mut ErrorSink,
}

impl<'s> ResultVerifier<'s> {
    /// Verifier reporting to `sink`, starting from a fresh verdict.
    pub const fn new(sink: &'s mut ErrorSink) -> Self {
        Self {
            verdict: Verdict::new(),
            sink,
        }
    }

    /// Checks one result. Returns true iff `actual == expected`.
    pub fn check(
        &mut self,
        case: CaseId,
        actual: u64,
        expected: u64,
        context: CheckContext,
    ) -> bool {
        let matched = actual == expected;
        self.verdict.record(case, matched);
        if !matched {
            let mismatch = MismatchError {
                case,
                index: context.index,
                actual,
                expected,
                input: context.input,
            };
            tracing::debug!(%mismatch, "mismatch");
            self.sink.mismatch(&mismatch);
        }
        matched
    }

    /// Verdict so far.
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Sink for progress and status lines.
    pub fn sink_mut(&mut self) -> &mut ErrorSink {
        &mut *self.sink
    }

    /// Ends verification and hands back the verdict.
    pub fn finish(self) -> Verdict {
        self.verdict
    }
}
