//! # Evaluation Model Tests
//!
//! This module verifies the models that back the simulated accelerator.

use lutsim_core::accel::{EvalModel, FnModel, GoldenModel, LutCoreModel};
use lutsim_core::common::{Bank, ConfigWord};
use lutsim_core::data::{GenerateOptions, generate};
use lutsim_core::lut::LutGeometry;

use crate::common::harness::{case_a_fn, case_b_fn, two_bank_data};

#[test]
fn test_golden_model_answers_known_inputs() {
    let data = two_bank_data(4);
    let model = GoldenModel::new(&data);
    let x = data.single.inputs()[2];
    assert_eq!(model.evaluate(&[], x), case_a_fn(x));
    let t = data.triple.inputs()[3];
    assert_eq!(model.evaluate3(&[], t), case_b_fn(t[0], t[1], t[2]));
}

#[test]
fn test_golden_model_unknown_input_is_zero() {
    let model = GoldenModel::new(&two_bank_data(2));
    assert_eq!(model.evaluate(&[], 0xdead_beef), 0);
    assert_eq!(model.evaluate3(&[], [9, 9, 9]), 0);
}

#[test]
fn test_fn_model_sees_config_and_operands() {
    let model = FnModel::new(|cfg, ops| cfg.len() as u64 * 100 + ops.iter().sum::<u64>());
    let cfg = [ConfigWord(0); 3];
    assert_eq!(model.evaluate(&cfg, 5), 305);
    assert_eq!(model.evaluate3(&cfg, [1, 2, 3]), 306);
    assert_eq!(FnModel::constant(7).evaluate(&[], 1), 7);
}

#[test]
fn test_lut_core_model_matches_generator() {
    let generated = generate(&GenerateOptions {
        count: 8,
        seed: 11,
        ..GenerateOptions::default()
    })
    .unwrap();
    let model = LutCoreModel::new(LutGeometry::default());

    let bank1 = generated.data.bitstreams.get(Bank::Bank1).unwrap().words();
    for (x, expected) in generated.data.single.iter() {
        assert_eq!(model.evaluate(bank1, x), expected);
    }
    let bank0 = generated.data.bitstreams.get(Bank::Bank0).unwrap().words();
    for ([a, b, c], expected) in generated.data.triple.iter() {
        assert_eq!(model.evaluate3(bank0, [a, b, c]), expected);
    }
}

#[test]
fn test_lut_core_model_rejects_short_bitstream() {
    let model = LutCoreModel::default();
    assert_eq!(model.evaluate(&[ConfigWord(1); 4], 1), 0);
}
