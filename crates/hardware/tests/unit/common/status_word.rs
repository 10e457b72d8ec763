//! # Status Word Tests
//!
//! This module verifies decoding of the bank status register.

use lutsim_core::common::StatusWord;
use lutsim_core::common::constants::{
    POWER_ON_STATUS, STATUS_E_INSTR_CODE, STATUS_E_INVALID_CFG, STATUS_E_PREMATURE_EXE,
};

#[test]
fn test_power_on_sentinel() {
    let status = StatusWord(POWER_ON_STATUS);
    assert!(status.is_power_on());
    assert_eq!(status.raw(), 0xaffe_dead);
    assert!(!StatusWord(0).is_power_on());
}

#[test]
fn test_from_parts_places_counter() {
    let status = StatusWord::from_parts(0, 52);
    assert_eq!(status.raw(), 52 << 8);
    assert_eq!(status.cfg_count(), 52);
    assert_eq!(status.flags(), 0);
    assert!(!status.has_errors());
}

#[test]
fn test_individual_flags() {
    let invalid = StatusWord::from_parts(STATUS_E_INVALID_CFG, 4);
    assert!(invalid.invalid_cfg());
    assert!(!invalid.premature_exe());
    assert!(invalid.has_errors());

    let premature = StatusWord::from_parts(STATUS_E_PREMATURE_EXE, 0);
    assert!(premature.premature_exe());
    assert!(!premature.instr_code());

    let instr = StatusWord::from_parts(STATUS_E_INSTR_CODE, 0);
    assert!(instr.instr_code());
    assert!(instr.has_errors());
}

#[test]
fn test_lower_hex_is_raw_value() {
    let status = StatusWord::from_parts(STATUS_E_PREMATURE_EXE, 4);
    assert_eq!(format!("{status:016x}"), "0000000000000402");
}
