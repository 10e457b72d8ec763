//! Fatal signal sinks.
//!
//! In silent mode a mismatch leaves no text behind. Instead a `FatalSignal` is
//! raised through a `TrapSink`, which makes it visible to whatever supervises the
//! run: a shared exit code, a register a debugger watches, or a test.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::common::FatalSignal;
use crate::common::constants::EXIT_SIGNAL_IDLE;

/// Receiver of silent-mode fatal signals.
pub trait TrapSink: fmt::Debug {
    /// Raises `signal`. Must return; the run continues afterwards.
    fn raise(&mut self, signal: FatalSignal);
}

/// Stores the trap code into a shared exit signal.
///
/// The signal holds `EXIT_SIGNAL_IDLE` until the first trap.
#[derive(Debug, Clone)]
pub struct ExitSignalTrap {
    exit_signal: Arc<AtomicU64>,
}

impl ExitSignalTrap {
    /// Trap writing into `exit_signal`.
    pub const fn new(exit_signal: Arc<AtomicU64>) -> Self {
        Self { exit_signal }
    }

    /// Fresh exit signal initialised to `EXIT_SIGNAL_IDLE`.
    pub fn idle_signal() -> Arc<AtomicU64> {
        Arc::new(AtomicU64::new(EXIT_SIGNAL_IDLE))
    }

    /// Current signal value.
    pub fn code(&self) -> u64 {
        self.exit_signal.load(Ordering::Relaxed)
    }

    /// True once any trap has been raised.
    pub fn raised(&self) -> bool {
        self.code() != EXIT_SIGNAL_IDLE
    }
}

impl TrapSink for ExitSignalTrap {
    fn raise(&mut self, signal: FatalSignal) {
        self.exit_signal.store(signal.code, Ordering::Relaxed);
    }
}

/// Collects every raised signal. Clones share the collection.
#[derive(Debug, Clone, Default)]
pub struct RecordingTrap {
    signals: Arc<Mutex<Vec<FatalSignal>>>,
}

impl RecordingTrap {
    /// Empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals raised so far, in order.
    pub fn signals(&self) -> Vec<FatalSignal> {
        self.signals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl TrapSink for RecordingTrap {
    fn raise(&mut self, signal: FatalSignal) {
        self.signals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(signal);
    }
}

/// Loads the trap code into `t6` (`x31`), where a debugger or simulator watches for it.
#[cfg(target_arch = "riscv64")]
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisterTrap;

#[cfg(target_arch = "riscv64")]
impl TrapSink for RegisterTrap {
    fn raise(&mut self, signal: FatalSignal) {
        // SAFETY: writes only x31, declared as clobbered.
        unsafe {
            core::arch::asm!(
                "mv x31, {code}",
                code = in(reg) signal.code,
                out("x31") _,
                options(nomem, nostack),
            );
        }
    }
}
