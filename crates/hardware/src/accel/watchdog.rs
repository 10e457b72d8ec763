//! Latency budget wrapper.
//!
//! The accelerator contract has no timeouts: every call blocks until the hardware
//! answers. `Watchdog` measures each call after the fact and turns an overrun into
//! `AccelError::Timeout`, so a stalled bank surfaces as an error instead of
//! silently slowing a run.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::accel::{Accelerator, BackendType};
use crate::common::{AccelError, Bank, ConfigWord, StatusWord};

/// Backend wrapper that fails calls exceeding `budget`.
#[derive(Debug)]
pub struct Watchdog<A> {
    inner: A,
    budget: Duration,
}

impl<A: Accelerator> Watchdog<A> {
    /// Wraps `inner` with a per-call budget.
    pub const fn new(inner: A, budget: Duration) -> Self {
        Self { inner, budget }
    }

    /// Per-call budget.
    pub const fn budget(&self) -> Duration {
        self.budget
    }

    /// Wrapped backend.
    pub const fn inner(&self) -> &A {
        &self.inner
    }

    /// Unwraps the backend.
    pub fn into_inner(self) -> A {
        self.inner
    }

    fn timed<T>(
        &mut self,
        op: &'static str,
        bank: Bank,
        f: impl FnOnce(&mut A) -> Result<T, AccelError>,
    ) -> Result<T, AccelError> {
        let start = Instant::now();
        let value = f(&mut self.inner)?;
        let elapsed = start.elapsed();
        if elapsed > self.budget {
            let err = AccelError::Timeout {
                op,
                bank,
                elapsed_us: u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
                budget_us: u64::try_from(self.budget.as_micros()).unwrap_or(u64::MAX),
            };
            warn!(error = %err, "watchdog expired");
            return Err(err);
        }
        Ok(value)
    }
}

impl<A: Accelerator> Accelerator for Watchdog<A> {
    fn backend_type(&self) -> BackendType {
        self.inner.backend_type()
    }

    fn reset(&mut self, bank: Bank) -> Result<(), AccelError> {
        self.timed("reset", bank, |a| a.reset(bank))
    }

    fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError> {
        self.timed("load", bank, |a| a.load(bank, word))
    }

    fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError> {
        self.timed("evaluate", bank, |a| a.evaluate(bank, input))
    }

    fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError> {
        self.timed("evaluate3", bank, |acc| acc.evaluate3(bank, a, b, c))
    }

    fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError> {
        self.timed("status", bank, |a| a.status(bank))
    }
}
