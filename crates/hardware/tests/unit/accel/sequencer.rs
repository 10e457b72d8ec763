//! # Call Ordering Tests
//!
//! This module verifies the per-bank protocol enforced by `Sequenced`.

use lutsim_core::accel::{AccelOp, Accelerator, BankState, Sequenced, SimulatedAccelerator};
use lutsim_core::common::{AccelError, Bank, ConfigWord, ConfigurationError, StatusWord};
use mockall::Sequence;
use mockall::predicate::eq;

use crate::common::harness::{single_bank_data, two_bank_data, two_bank_sim};
use crate::common::mocks::accelerator::MockAccel;

fn sequenced_two_bank() -> Sequenced<SimulatedAccelerator> {
    Sequenced::for_store(two_bank_sim(), &two_bank_data(1).bitstreams)
}

fn config_err(err: AccelError) -> ConfigurationError {
    match err {
        AccelError::Configuration(e) => e,
        other => panic!("expected a configuration error, got {other:?}"),
    }
}

#[test]
fn test_load_before_reset_rejected() {
    let mut accel = sequenced_two_bank();
    let err = accel.load(Bank::Bank0, ConfigWord(1)).unwrap_err();
    assert_eq!(
        config_err(err),
        ConfigurationError::LoadBeforeReset { bank: Bank::Bank0 }
    );
    assert!(accel.inner().ops().is_empty());
}

#[test]
fn test_state_transitions() {
    let mut accel = sequenced_two_bank();
    assert_eq!(accel.state(Bank::Bank0), BankState::Unknown);

    accel.reset(Bank::Bank0).unwrap();
    assert_eq!(accel.state(Bank::Bank0), BankState::Unconfigured);

    accel.load(Bank::Bank0, ConfigWord(0xb0)).unwrap();
    assert_eq!(accel.state(Bank::Bank0), BankState::Loading { loaded: 1 });

    accel.load(Bank::Bank0, ConfigWord(0xb1)).unwrap();
    accel.load(Bank::Bank0, ConfigWord(0xb2)).unwrap();
    assert_eq!(accel.state(Bank::Bank0), BankState::Loaded);

    let _ = accel.evaluate3(Bank::Bank0, 1, 2, 3).unwrap();
    let _ = accel.evaluate3(Bank::Bank0, 1, 2, 3).unwrap();
    assert_eq!(accel.state(Bank::Bank0), BankState::Evaluated { count: 2 });
    assert_eq!(accel.state(Bank::Bank1), BankState::Unknown);
}

#[test]
fn test_too_many_words_rejected() {
    let mut accel = sequenced_two_bank();
    accel.reset(Bank::Bank0).unwrap();
    for w in [0xb0, 0xb1, 0xb2] {
        accel.load(Bank::Bank0, ConfigWord(w)).unwrap();
    }
    let err = accel.load(Bank::Bank0, ConfigWord(0xb3)).unwrap_err();
    assert_eq!(
        config_err(err),
        ConfigurationError::TooManyWords {
            bank: Bank::Bank0,
            index: 3,
            expected: 3
        }
    );
    assert_eq!(accel.inner().words(Bank::Bank0).len(), 3);
}

#[test]
fn test_evaluate_before_loaded_rejected() {
    let mut accel = sequenced_two_bank();
    accel.reset(Bank::Bank1).unwrap();
    accel.load(Bank::Bank1, ConfigWord(0xa0)).unwrap();

    let err = accel.evaluate(Bank::Bank1, 7).unwrap_err();
    assert_eq!(
        config_err(err),
        ConfigurationError::NotLoaded {
            bank: Bank::Bank1,
            loaded: 1,
            expected: 5
        }
    );
    assert!(
        !accel
            .inner()
            .ops()
            .iter()
            .any(|op| matches!(op, AccelOp::Evaluate(..)))
    );
}

#[test]
fn test_reset_returns_bank_to_unconfigured() {
    let mut accel = sequenced_two_bank();
    accel.reset(Bank::Bank0).unwrap();
    for w in [0xb0, 0xb1, 0xb2] {
        accel.load(Bank::Bank0, ConfigWord(w)).unwrap();
    }
    let _ = accel.evaluate3(Bank::Bank0, 0, 0, 0).unwrap();

    accel.reset(Bank::Bank0).unwrap();
    assert_eq!(accel.state(Bank::Bank0), BankState::Unconfigured);
    assert!(accel.evaluate3(Bank::Bank0, 0, 0, 0).is_err());
}

#[test]
fn test_unknown_bank_rejected_but_status_allowed() {
    let data = single_bank_data();
    let mut accel = Sequenced::for_store(SimulatedAccelerator::golden(&data), &data.bitstreams);

    let err = accel.reset(Bank::Bank1).unwrap_err();
    assert_eq!(
        config_err(err),
        ConfigurationError::UnknownBank { bank: Bank::Bank1 }
    );
    assert!(accel.status(Bank::Bank1).unwrap().is_power_on());
}

#[test]
fn test_forwards_in_program_order() {
    let mut mock = MockAccel::quiet();
    let mut seq = Sequence::new();
    let _ = mock
        .expect_reset()
        .with(eq(Bank::Bank0))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    for w in [0x10, 0x20] {
        let _ = mock
            .expect_load()
            .with(eq(Bank::Bank0), eq(ConfigWord(w)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
    }
    let _ = mock
        .expect_evaluate()
        .with(eq(Bank::Bank0), eq(5))
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_, x| Ok(x * 2));

    let mut accel = Sequenced::new(mock, [Some(2), None]);
    accel.reset(Bank::Bank0).unwrap();
    accel.load(Bank::Bank0, ConfigWord(0x10)).unwrap();
    accel.load(Bank::Bank0, ConfigWord(0x20)).unwrap();
    assert_eq!(accel.evaluate(Bank::Bank0, 5).unwrap(), 10);
    assert_eq!(accel.status(Bank::Bank0).unwrap(), StatusWord(0));
}

#[test]
fn test_rejected_calls_never_reach_backend() {
    // No expectations for reset, load or evaluate: any forwarded call panics.
    let mock = MockAccel::quiet();
    let mut accel = Sequenced::new(mock, [Some(4), None]);
    assert!(accel.load(Bank::Bank0, ConfigWord(1)).is_err());
    assert!(accel.evaluate(Bank::Bank0, 1).is_err());
    assert!(accel.evaluate3(Bank::Bank0, 1, 2, 3).is_err());
    assert!(accel.reset(Bank::Bank1).is_err());
}

#[test]
fn test_backend_errors_leave_state_unchanged() {
    let mut mock = MockAccel::quiet();
    let _ = mock.expect_reset().returning(|bank| {
        Err(AccelError::Timeout {
            op: "reset",
            bank,
            elapsed_us: 2,
            budget_us: 1,
        })
    });
    let mut accel = Sequenced::new(mock, [Some(4), None]);
    assert!(matches!(
        accel.reset(Bank::Bank0),
        Err(AccelError::Timeout { .. })
    ));
    assert_eq!(accel.state(Bank::Bank0), BankState::Unknown);
}

#[test]
fn test_mock_backend_behind_trait_object() {
    let mut mock = MockAccel::quiet();
    let _ = mock.expect_reset().with(eq(Bank::Bank0)).times(1).returning(|_| Ok(()));

    let mut accel: Box<dyn Accelerator> = Box::new(Sequenced::for_store(
        mock,
        &single_bank_data().bitstreams,
    ));
    accel.reset(Bank::Bank0).unwrap();
    assert_eq!(accel.status(Bank::Bank0).unwrap(), StatusWord::default());
    assert!(format!("{accel:?}").contains("MockAccel"));
}
