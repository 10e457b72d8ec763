//! Call-ordering enforcement.
//!
//! `Sequenced` wraps any backend and rejects calls that would leave a bank in an
//! undefined configuration: a load without a preceding reset, more loads than the
//! bitstream holds, an evaluate before the bank is fully loaded, or any
//! configuration access to a bank the deployment has no bitstream for. Rejected
//! calls never reach the wrapped backend.

use tracing::debug;
#[cfg(feature = "op-trace")]
use tracing::trace;

use crate::accel::{Accelerator, BackendType, BankState};
use crate::common::{AccelError, Bank, ConfigWord, ConfigurationError, StatusWord};
use crate::data::BitstreamStore;

/// Backend wrapper enforcing the per-bank protocol.
#[derive(Debug)]
pub struct Sequenced<A> {
    inner: A,
    expected: [Option<usize>; 2],
    states: [BankState; 2],
}

impl<A: Accelerator> Sequenced<A> {
    /// Wraps `inner`; `expected[i]` is the bitstream length of bank `i`, `None` if absent.
    pub const fn new(inner: A, expected: [Option<usize>; 2]) -> Self {
        Self {
            inner,
            expected,
            states: [BankState::Unknown; 2],
        }
    }

    /// Wraps `inner` with the bitstream lengths of `store`.
    pub fn for_store(inner: A, store: &BitstreamStore) -> Self {
        let expected = Bank::ALL.map(|bank| store.get(bank).map(|b| b.len()));
        Self::new(inner, expected)
    }

    /// Current state of `bank`.
    pub const fn state(&self, bank: Bank) -> BankState {
        self.states[bank.index()]
    }

    /// Wrapped backend.
    pub const fn inner(&self) -> &A {
        &self.inner
    }

    /// Mutable access to the wrapped backend, bypassing the ordering checks.
    pub const fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }

    /// Unwraps the backend.
    pub fn into_inner(self) -> A {
        self.inner
    }

    fn expected(&self, bank: Bank) -> Result<usize, ConfigurationError> {
        self.expected[bank.index()].ok_or(ConfigurationError::UnknownBank { bank })
    }

    fn ready(&self, bank: Bank) -> Result<(), ConfigurationError> {
        let expected = self.expected(bank)?;
        let state = self.state(bank);
        if state.is_ready() {
            Ok(())
        } else {
            Err(ConfigurationError::NotLoaded {
                bank,
                loaded: state.loaded_words(expected),
                expected,
            })
        }
    }

    fn mark_evaluated(&mut self, bank: Bank) {
        let state = &mut self.states[bank.index()];
        *state = match *state {
            BankState::Evaluated { count } => BankState::Evaluated { count: count + 1 },
            _ => BankState::Evaluated { count: 1 },
        };
    }
}

impl<A: Accelerator> Accelerator for Sequenced<A> {
    fn backend_type(&self) -> BackendType {
        self.inner.backend_type()
    }

    fn reset(&mut self, bank: Bank) -> Result<(), AccelError> {
        let expected = self.expected(bank)?;
        self.inner.reset(bank)?;
        self.states[bank.index()] = BankState::Unconfigured;
        debug!(%bank, words = expected, "bank reset");
        Ok(())
    }

    fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError> {
        let expected = self.expected(bank)?;
        let loaded = match self.state(bank) {
            BankState::Unknown => return Err(ConfigurationError::LoadBeforeReset { bank }.into()),
            state => state.loaded_words(expected),
        };
        if loaded >= expected {
            return Err(ConfigurationError::TooManyWords {
                bank,
                index: loaded,
                expected,
            }
            .into());
        }

        self.inner.load(bank, word)?;
        #[cfg(feature = "op-trace")]
        trace!(%bank, index = loaded, word = %format_args!("{word:#018x}"), "load");

        let loaded = loaded + 1;
        self.states[bank.index()] = if loaded == expected {
            debug!(%bank, words = loaded, "bank loaded");
            BankState::Loaded
        } else {
            BankState::Loading { loaded }
        };
        Ok(())
    }

    fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError> {
        self.ready(bank)?;
        let result = self.inner.evaluate(bank, input)?;
        #[cfg(feature = "op-trace")]
        trace!(%bank, input = %format_args!("{input:#018x}"), result = %format_args!("{result:#018x}"), "evaluate");
        self.mark_evaluated(bank);
        Ok(result)
    }

    fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError> {
        self.ready(bank)?;
        let result = self.inner.evaluate3(bank, a, b, c)?;
        #[cfg(feature = "op-trace")]
        trace!(
            %bank,
            a = %format_args!("{a:#018x}"),
            b = %format_args!("{b:#018x}"),
            c = %format_args!("{c:#018x}"),
            result = %format_args!("{result:#018x}"),
            "evaluate3"
        );
        self.mark_evaluated(bank);
        Ok(result)
    }

    fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError> {
        self.inner.status(bank)
    }
}
