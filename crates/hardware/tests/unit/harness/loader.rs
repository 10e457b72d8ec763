//! # Loader Tests
//!
//! This module verifies reset and load ordering for both cross-bank orders.

use lutsim_core::accel::{AccelOp, Sequenced, SimulatedAccelerator};
use lutsim_core::common::{Bank, ConfigWord, HarnessError};
use lutsim_core::config::LoadOrder;
use lutsim_core::harness::ConfigLoader;
use pretty_assertions::assert_eq;

use crate::common::harness::{single_bank_data, two_bank_data, two_bank_sim};

const BOTH: &[Bank] = &[Bank::Bank0, Bank::Bank1];

fn loads(ops: &[AccelOp]) -> Vec<(Bank, u64)> {
    ops.iter()
        .filter_map(|op| match *op {
            AccelOp::Load(bank, word) => Some((bank, word.get())),
            _ => None,
        })
        .collect()
}

#[test]
fn test_sequential_order() {
    let data = two_bank_data(1);
    let mut sim = two_bank_sim();
    ConfigLoader::new(LoadOrder::Sequential)
        .load_all(&mut sim, &data.bitstreams, BOTH)
        .unwrap();

    assert_eq!(sim.ops()[0], AccelOp::Reset(Bank::Bank0));
    assert_eq!(sim.ops()[1], AccelOp::Reset(Bank::Bank1));
    assert_eq!(
        loads(sim.ops()),
        vec![
            (Bank::Bank0, 0xb0),
            (Bank::Bank0, 0xb1),
            (Bank::Bank0, 0xb2),
            (Bank::Bank1, 0xa0),
            (Bank::Bank1, 0xa1),
            (Bank::Bank1, 0xa2),
            (Bank::Bank1, 0xa3),
            (Bank::Bank1, 0xa4),
        ]
    );
}

#[test]
fn test_interleaved_order() {
    let data = two_bank_data(1);
    let mut sim = two_bank_sim();
    ConfigLoader::new(LoadOrder::Interleaved)
        .load_all(&mut sim, &data.bitstreams, BOTH)
        .unwrap();

    assert_eq!(
        loads(sim.ops()),
        vec![
            (Bank::Bank0, 0xb0),
            (Bank::Bank1, 0xa0),
            (Bank::Bank0, 0xb1),
            (Bank::Bank1, 0xa1),
            (Bank::Bank0, 0xb2),
            (Bank::Bank1, 0xa2),
            (Bank::Bank1, 0xa3),
            (Bank::Bank1, 0xa4),
        ]
    );
}

#[test]
fn test_both_orders_configure_identically() {
    let data = two_bank_data(1);
    let mut banks = Vec::new();
    for order in [LoadOrder::Sequential, LoadOrder::Interleaved] {
        let mut accel = Sequenced::for_store(two_bank_sim(), &data.bitstreams);
        ConfigLoader::new(order)
            .load_all(&mut accel, &data.bitstreams, BOTH)
            .unwrap();
        assert!(accel.state(Bank::Bank0).is_ready());
        assert!(accel.state(Bank::Bank1).is_ready());
        let sim = accel.into_inner();
        banks.push((sim.words(Bank::Bank0).to_vec(), sim.words(Bank::Bank1).to_vec()));
    }
    assert_eq!(banks[0], banks[1]);
}

#[test]
fn test_load_single_bank() {
    let data = single_bank_data();
    let mut sim = SimulatedAccelerator::golden(&data);
    ConfigLoader::load(
        &mut sim,
        Bank::Bank0,
        data.bitstreams.get(Bank::Bank0).unwrap(),
    )
    .unwrap();
    assert_eq!(sim.ops().len(), 5);
    assert_eq!(
        sim.words(Bank::Bank0),
        &[
            ConfigWord(0x11),
            ConfigWord(0x22),
            ConfigWord(0x33),
            ConfigWord(0x44)
        ]
    );
}

#[test]
fn test_missing_bitstream() {
    let data = single_bank_data();
    let mut sim = SimulatedAccelerator::golden(&data);
    let result = ConfigLoader::default().load_configured(&mut sim, &data.bitstreams, BOTH);
    assert!(matches!(
        result,
        Err(HarnessError::MissingBitstream(Bank::Bank1))
    ));
    assert!(sim.ops().is_empty());
}
