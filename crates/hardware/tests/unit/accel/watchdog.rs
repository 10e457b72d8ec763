//! # Watchdog Tests
//!
//! This module verifies that calls over budget surface as timeouts.

use std::thread;
use std::time::Duration;

use lutsim_core::accel::{Accelerator, FnModel, SimulatedAccelerator, Watchdog};
use lutsim_core::common::{AccelError, Bank, ConfigWord};

fn slow_sim() -> SimulatedAccelerator {
    SimulatedAccelerator::new().with_bank(
        Bank::Bank0,
        1,
        FnModel::new(|_, ops| {
            thread::sleep(Duration::from_millis(20));
            ops[0]
        }),
    )
}

#[test]
fn test_fast_calls_pass_through() {
    let mut accel = Watchdog::new(slow_sim(), Duration::from_secs(5));
    accel.reset(Bank::Bank0).unwrap();
    accel.load(Bank::Bank0, ConfigWord(1)).unwrap();
    assert_eq!(accel.evaluate(Bank::Bank0, 42).unwrap(), 42);
    assert_eq!(accel.budget(), Duration::from_secs(5));
}

#[test]
fn test_slow_call_times_out() {
    let mut sim = slow_sim();
    sim.reset(Bank::Bank0).unwrap();
    sim.load(Bank::Bank0, ConfigWord(1)).unwrap();

    let mut accel = Watchdog::new(sim, Duration::from_millis(1));
    match accel.evaluate(Bank::Bank0, 42) {
        Err(AccelError::Timeout {
            op,
            bank,
            elapsed_us,
            budget_us,
        }) => {
            assert_eq!(op, "evaluate");
            assert_eq!(bank, Bank::Bank0);
            assert_eq!(budget_us, 1000);
            assert!(elapsed_us >= 20_000);
        }
        other => panic!("expected a timeout, got {other:?}"),
    }
    assert_eq!(accel.into_inner().ops().len(), 3);
}
