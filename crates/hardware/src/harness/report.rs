//! Error reporting and status snapshots.
//!
//! The reporting mode is fixed for a run:
//!
//! * **Verbose:** mismatches, progress and status lines go to the console as
//!   fixed-format ASCII, followed by a three-byte terminator.
//! * **Silent:** no text at all; every mismatch raises a `FatalSignal`.
//!
//! Console failures are logged and otherwise ignored: a broken diagnostic channel
//! must not change the verdict.

use std::fmt;

use tracing::{debug, warn};

use crate::accel::Accelerator;
use crate::common::constants::{HEX_FIELD_WIDTH, TERMINATOR_LEAD, TERMINATOR_TAIL};
use crate::common::{AccelError, Bank, FatalSignal, MismatchError, StatusWord};
use crate::harness::console::Console;
use crate::harness::trap::TrapSink;

/// Formats a mismatch as one diagnostic line.
///
/// ```
/// use lutsim_core::common::{CaseId, CaseInput, MismatchError};
/// use lutsim_core::harness::report::format_mismatch;
///
/// let m = MismatchError {
///     case: CaseId::A,
///     index: 0,
///     actual: 0xab,
///     expected: 0xaa,
///     input: CaseInput::Single(1),
/// };
/// assert_eq!(
///     format_mismatch(&m),
///     "  ERROR: (case A) 00000000000000ab (phys) != 00000000000000aa (exp) @ 0000000000000001"
/// );
/// ```
pub fn format_mismatch(mismatch: &MismatchError) -> String {
    format!(
        "  ERROR: (case {}) {:0w$x} (phys) != {:0w$x} (exp) @ {}",
        mismatch.case,
        mismatch.actual,
        mismatch.expected,
        mismatch.input,
        w = HEX_FIELD_WIDTH
    )
}

/// Formats a status line; banks are separated by two spaces.
pub fn format_status(statuses: &[StatusWord]) -> String {
    let fields: Vec<String> = statuses
        .iter()
        .map(|s| format!("{:0w$x}", s.raw(), w = HEX_FIELD_WIDTH))
        .collect();
    format!("status: {}", fields.join("  "))
}

/// End-of-run terminator: a zero byte, the failure flag, and a newline.
pub const fn terminator(failed: bool) -> [u8; 3] {
    [TERMINATOR_LEAD, failed as u8, TERMINATOR_TAIL]
}

/// Destination of mismatch reports.
#[derive(Debug)]
pub enum ErrorSink {
    /// Text on a console.
    Verbose(Box<dyn Console>),
    /// Fatal signals through a trap sink.
    Silent(Box<dyn TrapSink>),
}

impl ErrorSink {
    /// Verbose sink on `console`.
    pub fn verbose(console: impl Console + 'static) -> Self {
        Self::Verbose(Box::new(console))
    }

    /// Silent sink raising through `trap`.
    pub fn silent(trap: impl TrapSink + 'static) -> Self {
        Self::Silent(Box::new(trap))
    }

    /// Picks the sink for the configured mode.
    pub fn select(verbose: bool, console: Box<dyn Console>, trap: Box<dyn TrapSink>) -> Self {
        if verbose {
            Self::Verbose(console)
        } else {
            Self::Silent(trap)
        }
    }

    /// True in verbose mode.
    pub const fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose(_))
    }

    /// Reports one mismatch.
    pub fn mismatch(&mut self, mismatch: &MismatchError) {
        match self {
            Self::Verbose(console) => write_line(console.as_mut(), &format_mismatch(mismatch)),
            Self::Silent(trap) => trap.raise(FatalSignal::for_mismatch(mismatch)),
        }
    }

    /// Emits a progress line (verbose only).
    pub fn progress(&mut self, message: &str) {
        self.line(message);
    }

    /// Emits a status line (verbose only).
    pub fn status(&mut self, statuses: &[StatusWord]) {
        self.line(&format_status(statuses));
    }

    /// Emits the terminator (verbose only).
    pub fn terminate(&mut self, failed: bool) {
        if let Self::Verbose(console) = self {
            if let Err(e) = console.write_bytes(&terminator(failed)) {
                warn!(error = %e, "console write failed");
            }
        }
    }

    fn line(&mut self, text: &str) {
        if let Self::Verbose(console) = self {
            write_line(console.as_mut(), text);
        }
    }
}

fn write_line(console: &mut dyn Console, text: &str) {
    if let Err(e) = console.println(text) {
        warn!(error = %e, "console write failed");
    }
}

/// Point of the run at which status registers are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Checkpoint {
    /// Before any reset.
    PowerOn,
    /// After every bank was reset.
    AfterReset,
    /// After every bank was loaded.
    AfterLoad,
    /// After case A, when it is the last case run.
    AfterCaseA,
    /// After case B.
    AfterCaseB,
}

impl fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PowerOn => "power-on",
            Self::AfterReset => "after reset",
            Self::AfterLoad => "after load",
            Self::AfterCaseA => "after case A",
            Self::AfterCaseB => "after case B",
        };
        f.write_str(name)
    }
}

/// Samples status registers. Never affects the verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusReporter;

impl StatusReporter {
    /// Reads the status of one bank.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn snapshot<A: Accelerator + ?Sized>(
        accel: &mut A,
        bank: Bank,
    ) -> Result<StatusWord, AccelError> {
        accel.status(bank)
    }

    /// Reads the status of every bank in `banks` and reports one status line.
    ///
    /// # Errors
    ///
    /// Propagates backend failures.
    pub fn snapshot_all<A: Accelerator + ?Sized>(
        accel: &mut A,
        banks: &[Bank],
        checkpoint: Checkpoint,
        sink: &mut ErrorSink,
    ) -> Result<Vec<StatusWord>, AccelError> {
        let statuses = banks
            .iter()
            .map(|&bank| Self::snapshot(accel, bank))
            .collect::<Result<Vec<_>, _>>()?;

        for (bank, status) in banks.iter().zip(&statuses) {
            debug!(%bank, %checkpoint, %status, "status");
            if status.has_errors() {
                warn!(%bank, %checkpoint, %status, "status reports errors");
            }
        }
        sink.status(&statuses);
        Ok(statuses)
    }
}
