//! The bring-up test sequence.
//!
//! One harness, parameterised by `HarnessConfig`, runs the fixed sequence:
//!
//! ```text
//! [status] -> reset -> [status] -> load -> [status] -> case A -> case B -> [status] -> terminator
//! ```
//!
//! Bracketed steps depend on the reporting mode. In verbose mode every status
//! checkpoint is reported; in silent mode only the post-load and final snapshots
//! are taken, and nothing is printed.
//!
//! The harness never exits the process. `Harness::run` returns the verdict;
//! deployments without a supervisor park in `idle`.

/// Diagnostic console.
pub mod console;
/// Case A and case B execution.
pub mod executor;
/// Bank configuration.
pub mod loader;
/// Error sink, diagnostic formatting and status snapshots.
pub mod report;
/// Fatal signal sinks.
pub mod trap;
/// Result verification and the run verdict.
pub mod verifier;

use tracing::info;

use crate::accel::Accelerator;
use crate::common::HarnessError;
use crate::config::HarnessConfig;
use crate::data::TestData;

pub use console::{BufferConsole, Console, WriterConsole};
pub use executor::TestExecutor;
pub use loader::ConfigLoader;
pub use report::{Checkpoint, ErrorSink, StatusReporter};
#[cfg(target_arch = "riscv64")]
pub use trap::RegisterTrap;
pub use trap::{ExitSignalTrap, RecordingTrap, TrapSink};
pub use verifier::{CaseTally, CheckContext, ResultVerifier, Verdict};

/// Configured test sequence over one accelerator and one data set.
#[derive(Debug)]
pub struct Harness<'d, A> {
    config: HarnessConfig,
    accel: A,
    data: &'d TestData,
    sink: ErrorSink,
}

impl<'d, A: Accelerator> Harness<'d, A> {
    /// Builds a harness. The reporting mode follows `sink`.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::MissingBitstream` if a configured bank has no bitstream.
    pub fn new(
        config: HarnessConfig,
        accel: A,
        data: &'d TestData,
        sink: ErrorSink,
    ) -> Result<Self, HarnessError> {
        if let Some(&bank) = config
            .banks()
            .iter()
            .find(|&&bank| data.bitstreams.get(bank).is_none())
        {
            return Err(HarnessError::MissingBitstream(bank));
        }
        Ok(Self {
            config,
            accel,
            data,
            sink,
        })
    }

    /// Runs the full sequence once and returns its verdict.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError` for accelerator protocol violations or backend
    /// failures. Mismatches are reported through the sink, not as errors.
    pub fn run(&mut self) -> Result<Verdict, HarnessError> {
        let banks = self.config.banks();
        let verbose = self.sink.is_verbose();
        let loader = ConfigLoader::new(self.config.load_order);
        let executor = TestExecutor::new(
            self.config.single_input_bank(),
            self.config.triple_input_bank(),
        );
        info!(
            backend = %self.accel.backend_type(),
            banks = %self.config.bank_count,
            verbose,
            "beginning test"
        );

        let accel = &mut self.accel;
        let sink = &mut self.sink;
        sink.progress("beginning test..");
        if verbose {
            let _ = StatusReporter::snapshot_all(accel, banks, Checkpoint::PowerOn, sink)?;
        }

        ConfigLoader::reset_all(accel, banks)?;
        if verbose {
            let _ = StatusReporter::snapshot_all(accel, banks, Checkpoint::AfterReset, sink)?;
        }
        loader.load_configured(accel, &self.data.bitstreams, banks)?;
        let _ = StatusReporter::snapshot_all(accel, banks, Checkpoint::AfterLoad, sink)?;

        let mut verifier = ResultVerifier::new(sink);
        let mut last = None;
        if self.config.run_single_input_case {
            verifier.sink_mut().progress("case A..");
            executor.run_single(accel, &self.data.single, &mut verifier)?;
            last = Some(Checkpoint::AfterCaseA);
        }
        if self.config.run_triple_input_case {
            verifier.sink_mut().progress("case B..");
            executor.run_triple(accel, &self.data.triple, &mut verifier)?;
            last = Some(Checkpoint::AfterCaseB);
        }
        let verdict = verifier.finish();

        if let Some(checkpoint) = last {
            let _ = StatusReporter::snapshot_all(accel, banks, checkpoint, sink)?;
        }
        sink.terminate(verdict.failed());

        info!(
            passed = verdict.passed(),
            checks = verdict.total_checks(),
            mismatches = verdict.total_mismatches(),
            "test complete"
        );
        Ok(verdict)
    }

    /// Harness configuration.
    pub const fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Accelerator under test.
    pub const fn accel(&self) -> &A {
        &self.accel
    }

    /// Mutable access to the accelerator under test.
    pub const fn accel_mut(&mut self) -> &mut A {
        &mut self.accel
    }

    /// Releases the accelerator and the sink.
    pub fn into_parts(self) -> (A, ErrorSink) {
        (self.accel, self.sink)
    }
}

/// Parks the calling thread forever, like firmware after its test completes.
pub fn idle() -> ! {
    loop {
        std::thread::park();
    }
}
