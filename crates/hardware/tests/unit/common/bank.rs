//! # Bank Tests
//!
//! This module verifies bank indexing and the serialized form of bank counts.

use lutsim_core::common::{Bank, BankCount, DataError};
use pretty_assertions::assert_eq;

#[test]
fn test_bank_index_round_trip() {
    for bank in Bank::ALL {
        assert_eq!(Bank::from_index(bank.index()).unwrap(), bank);
    }
}

#[test]
fn test_bank_from_invalid_index() {
    assert!(matches!(Bank::from_index(2), Err(DataError::InvalidBank(2))));
}

#[test]
fn test_bank_display_is_index() {
    assert_eq!(Bank::Bank0.to_string(), "0");
    assert_eq!(Bank::Bank1.to_string(), "1");
}

#[test]
fn test_bank_count_banks() {
    assert_eq!(BankCount::One.banks(), &[Bank::Bank0]);
    assert_eq!(BankCount::Two.banks(), &[Bank::Bank0, Bank::Bank1]);
    assert_eq!(BankCount::default(), BankCount::Two);
}

#[test]
fn test_bank_count_deserializes_from_number() {
    let one: BankCount = serde_json::from_str("1").unwrap();
    let two: BankCount = serde_json::from_str("2").unwrap();
    assert_eq!(one, BankCount::One);
    assert_eq!(two, BankCount::Two);
    assert_eq!(serde_json::to_string(&BankCount::One).unwrap(), "1");
}

#[test]
fn test_bank_count_rejects_out_of_range() {
    assert!(serde_json::from_str::<BankCount>("0").is_err());
    assert!(serde_json::from_str::<BankCount>("3").is_err());
    assert!(matches!(
        BankCount::try_from(3u8),
        Err(DataError::InvalidBankCount(3))
    ));
}
