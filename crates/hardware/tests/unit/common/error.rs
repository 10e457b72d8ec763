//! # Error and Signal Tests
//!
//! This module verifies case input rendering, error messages, and fatal signals.

use lutsim_core::common::constants::FATAL_TRAP_CODE;
use lutsim_core::common::{
    AccelError, Bank, CaseId, CaseInput, ConfigurationError, FatalSignal, MismatchError,
};

#[test]
fn test_single_input_display() {
    assert_eq!(CaseInput::Single(1).to_string(), "0000000000000001");
}

#[test]
fn test_triple_input_display() {
    let input = CaseInput::Triple([1, 0xff, u64::MAX]);
    assert_eq!(
        input.to_string(),
        "0000000000000001 00000000000000ff ffffffffffffffff"
    );
    assert_eq!(input.operands(), &[1, 0xff, u64::MAX]);
}

#[test]
fn test_fatal_signal_for_mismatch() {
    let mismatch = MismatchError {
        case: CaseId::B,
        index: 7,
        actual: 1,
        expected: 2,
        input: CaseInput::Triple([0, 0, 0]),
    };
    let signal = FatalSignal::for_mismatch(&mismatch);
    assert_eq!(signal.code, FATAL_TRAP_CODE);
    assert_eq!(signal.case, CaseId::B);
    assert_eq!(signal.index, 7);
    assert!(signal.to_string().contains("0xdead"));
}

#[test]
fn test_configuration_error_converts_to_accel_error() {
    let err: AccelError = ConfigurationError::LoadBeforeReset { bank: Bank::Bank1 }.into();
    assert_eq!(err.to_string(), "bank 1: load issued before reset");
}

#[test]
fn test_timeout_display() {
    let err = AccelError::Timeout {
        op: "evaluate",
        bank: Bank::Bank0,
        elapsed_us: 12,
        budget_us: 10,
    };
    assert_eq!(err.to_string(), "evaluate on bank 0 took 12us (budget 10us)");
}
