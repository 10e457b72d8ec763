//! # Simulated Accelerator Tests
//!
//! This module verifies the software backend's status register and its
//! reaction to protocol violations.

use lutsim_core::accel::{
    AccelOp, Accelerator, BackendType, FnModel, LutCoreModel, SimulatedAccelerator,
};
use lutsim_core::common::{Bank, BankCount, ConfigWord};
use lutsim_core::data::{GenerateOptions, generate};
use pretty_assertions::assert_eq;

use crate::common::harness::{single_bank_data, words};

fn sim_with_capacity(capacity: usize) -> SimulatedAccelerator {
    SimulatedAccelerator::new().with_bank(Bank::Bank0, capacity, FnModel::constant(0x5a))
}

#[test]
fn test_power_on_status_until_reset() {
    let mut sim = sim_with_capacity(2);
    assert!(sim.status(Bank::Bank0).unwrap().is_power_on());
    assert!(sim.status(Bank::Bank1).unwrap().is_power_on());

    sim.reset(Bank::Bank0).unwrap();
    assert_eq!(sim.status(Bank::Bank0).unwrap().raw(), 0);
    assert!(sim.status(Bank::Bank1).unwrap().is_power_on());
}

#[test]
fn test_status_counts_applied_words() {
    let mut sim = sim_with_capacity(4);
    sim.reset(Bank::Bank0).unwrap();
    for w in words(&[1, 2, 3]) {
        sim.load(Bank::Bank0, w).unwrap();
    }
    let status = sim.status(Bank::Bank0).unwrap();
    assert_eq!(status.cfg_count(), 3);
    assert!(!status.has_errors());
}

#[test]
fn test_load_past_capacity_sets_invalid_cfg() {
    let mut sim = sim_with_capacity(1);
    sim.reset(Bank::Bank0).unwrap();
    sim.load(Bank::Bank0, ConfigWord(1)).unwrap();
    sim.load(Bank::Bank0, ConfigWord(2)).unwrap();

    let status = sim.status(Bank::Bank0).unwrap();
    assert!(status.invalid_cfg());
    assert_eq!(status.cfg_count(), 1);
    assert_eq!(sim.words(Bank::Bank0), &[ConfigWord(1)]);
}

#[test]
fn test_premature_evaluate_sets_flag_and_returns_zero() {
    let mut sim = sim_with_capacity(2);
    sim.reset(Bank::Bank0).unwrap();
    sim.load(Bank::Bank0, ConfigWord(1)).unwrap();

    assert_eq!(sim.evaluate(Bank::Bank0, 9).unwrap(), 0);
    assert!(sim.status(Bank::Bank0).unwrap().premature_exe());

    sim.load(Bank::Bank0, ConfigWord(2)).unwrap();
    assert_eq!(sim.evaluate(Bank::Bank0, 9).unwrap(), 0x5a);
}

#[test]
fn test_reset_clears_flags_and_words() {
    let mut sim = sim_with_capacity(1);
    sim.reset(Bank::Bank0).unwrap();
    let _ = sim.evaluate(Bank::Bank0, 0).unwrap();
    assert!(sim.status(Bank::Bank0).unwrap().has_errors());

    sim.reset(Bank::Bank0).unwrap();
    assert_eq!(sim.status(Bank::Bank0).unwrap().raw(), 0);
    assert!(sim.words(Bank::Bank0).is_empty());
}

#[test]
fn test_bank_without_model_evaluates_to_zero() {
    let mut sim = SimulatedAccelerator::new();
    sim.reset(Bank::Bank1).unwrap();
    assert_eq!(sim.capacity(Bank::Bank1), 0);
    assert_eq!(sim.evaluate(Bank::Bank1, 1).unwrap(), 0);
}

#[test]
fn test_operation_log() {
    let mut sim = sim_with_capacity(1);
    sim.reset(Bank::Bank0).unwrap();
    sim.load(Bank::Bank0, ConfigWord(7)).unwrap();
    let _ = sim.evaluate3(Bank::Bank0, 1, 2, 3).unwrap();
    let _ = sim.status(Bank::Bank0).unwrap();

    assert_eq!(
        sim.ops(),
        &[
            AccelOp::Reset(Bank::Bank0),
            AccelOp::Load(Bank::Bank0, ConfigWord(7)),
            AccelOp::Evaluate3(Bank::Bank0, [1, 2, 3]),
            AccelOp::Status(Bank::Bank0),
        ]
    );
    assert_eq!(sim.ops()[1].name(), "load");
    sim.clear_ops();
    assert!(sim.ops().is_empty());
}

#[test]
fn test_evaluate_is_idempotent() {
    let generated = generate(&GenerateOptions {
        count: 4,
        seed: 21,
        bank_count: BankCount::One,
        ..GenerateOptions::default()
    })
    .unwrap();
    let bitstream = generated.data.bitstreams.get(Bank::Bank0).unwrap();
    let mut sim = SimulatedAccelerator::new().with_bank(
        Bank::Bank0,
        bitstream.len(),
        LutCoreModel::default(),
    );
    sim.reset(Bank::Bank0).unwrap();
    for &w in bitstream.words() {
        sim.load(Bank::Bank0, w).unwrap();
    }

    for (x, expected) in generated.data.single.iter() {
        let first = sim.evaluate(Bank::Bank0, x).unwrap();
        let second = sim.evaluate(Bank::Bank0, x).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, expected);
    }
    assert!(!sim.status(Bank::Bank0).unwrap().has_errors());
}

#[test]
fn test_golden_backend_sized_from_data() {
    let data = single_bank_data();
    let mut sim = SimulatedAccelerator::golden(&data);
    assert_eq!(sim.backend_type(), BackendType::Simulated);
    assert_eq!(sim.capacity(Bank::Bank0), 4);
    assert_eq!(sim.capacity(Bank::Bank1), 0);

    sim.reset(Bank::Bank0).unwrap();
    for &w in data.bitstreams.get(Bank::Bank0).unwrap().words() {
        sim.load(Bank::Bank0, w).unwrap();
    }
    assert_eq!(sim.evaluate(Bank::Bank0, 0x01).unwrap(), 0xAA);
    assert_eq!(sim.evaluate(Bank::Bank0, 0x02).unwrap(), 0);
}
