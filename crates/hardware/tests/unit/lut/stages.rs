//! # Pipeline Stage Tests
//!
//! This module verifies each LUT core stage against hand-computed values.

use lutsim_core::common::LutError;
use lutsim_core::lut::interp::{interpolate, sign_extend_incline};
use lutsim_core::lut::{AddressTranslator, InputDecoder, LookupTable, LutGeometry, Product};
use rstest::rstest;

#[test]
fn test_decoder_samples_chosen_bits() {
    let g = LutGeometry::default();
    let dec = InputDecoder::from_choices(&g, &[3, 0]).unwrap();
    assert_eq!(dec.masks().len(), 8);
    assert_eq!(dec.evaluate(0b1000), 0b01);
    assert_eq!(dec.evaluate(0b0001), 0b10);
    assert_eq!(dec.evaluate(0b1001), 0b11);
    assert_eq!(dec.evaluate(0b0110), 0);
}

#[test]
fn test_decoder_reads_upper_operands() {
    let g = LutGeometry::default();
    let dec = InputDecoder::from_choices(&g, &[64]).unwrap();
    assert_eq!(dec.evaluate(1u128 << 64), 1);
    assert_eq!(dec.evaluate(u128::from(u64::MAX)), 0);
}

#[test]
fn test_decoder_rejects_bad_choices() {
    let g = LutGeometry::default();
    assert_eq!(
        InputDecoder::from_choices(&g, &[96]),
        Err(LutError::Choice {
            choice: 96,
            width: 96
        })
    );
    let too_many = [0u32; 9];
    assert!(matches!(
        InputDecoder::from_choices(&g, &too_many),
        Err(LutError::Geometry(_))
    ));
}

#[test]
fn test_decoder_words_round_trip() {
    let g = LutGeometry::default();
    let dec = InputDecoder::from_choices(&g, &[0, 40, 95]).unwrap();
    let words = dec.words(&g);
    assert_eq!(words.len(), g.idec_register_count());
    assert_eq!(InputDecoder::from_words(&g, &words).unwrap(), dec);
}

#[test]
fn test_product_parse() {
    let g = LutGeometry::default();
    let p = Product::parse(&g, "01!2").unwrap();
    assert_eq!(p.positive, 0b011);
    assert_eq!(p.negative, 0b100);
    assert_eq!(p.row(&g), 0x34);
    assert_eq!(Product::parse(&g, "").unwrap(), Product::default());
}

#[rstest]
#[case::not_a_digit("0a")]
#[case::outside_selector("4")]
#[case::two_negations("0!1!2")]
fn test_product_parse_rejects(#[case] raw: &str) {
    let g = LutGeometry::default();
    assert!(matches!(
        Product::parse(&g, raw),
        Err(LutError::Product { .. })
    ));
}

#[rstest]
#[case(0b00, 0b00)]
#[case(0b01, 0b01)]
#[case(0b10, 0b10)]
#[case(0b11, 0b01)]
fn test_translator_sum_of_products(#[case] selector: u64, #[case] address: u64) {
    let g = LutGeometry::default();
    let pla = AddressTranslator::from_terms(&g, &["0", "1!0"]).unwrap();
    assert_eq!(pla.evaluate(&g, selector), address);
}

#[test]
fn test_translator_sum_term_ors_products() {
    let g = LutGeometry::default();
    let pla = AddressTranslator::from_terms(&g, &["01,2"]).unwrap();
    assert_eq!(pla.evaluate(&g, 0b0011), 1);
    assert_eq!(pla.evaluate(&g, 0b0100), 1);
    assert_eq!(pla.evaluate(&g, 0b0001), 0);
}

#[test]
fn test_translator_layout() {
    let g = LutGeometry::default();
    let pla = AddressTranslator::from_terms(&g, &["0", "1!0"]).unwrap();
    assert_eq!(pla.and_plane(), &[0x10, 0x21, 0, 0, 0, 0, 0, 0]);
    assert_eq!(pla.or_plane(), &[0b01, 0b10, 0, 0]);

    let words = pla.words(&g);
    let (and_words, or_words) = words.split_at(g.pla_and_register_count());
    assert_eq!(
        AddressTranslator::from_words(&g, and_words, or_words).unwrap(),
        pla
    );
}

#[test]
fn test_translator_capacity_errors() {
    let g = LutGeometry::default();
    assert_eq!(
        AddressTranslator::from_terms(&g, &["0", "1", "2", "3", "0"]),
        Err(LutError::TooManyOutputs { outputs: 5, max: 4 })
    );

    let narrow = LutGeometry {
        pla_interconnects: 1,
        ..LutGeometry::default()
    };
    assert_eq!(
        AddressTranslator::from_terms(&narrow, &["0", "1"]),
        Err(LutError::TooManyProducts {
            products: 2,
            max: 1
        })
    );
    assert!(AddressTranslator::from_terms(&narrow, &["0", "0"]).is_ok());
}

#[test]
fn test_table_fields_and_lookup() {
    let g = LutGeometry::default();
    assert_eq!(LookupTable::fields(&g, 0x12_3456), (0x1234, 0x56));

    let mut cells = vec![0u64; 16];
    cells[5] = 0xdead_beef;
    let table = LookupTable::from_cells(&g, &cells).unwrap();
    assert_eq!(table.evaluate(5), 0xad_beef);
    assert_eq!(table.evaluate(5 + 16), 0xad_beef);
    assert!(LookupTable::from_cells(&g, &cells[..15]).is_err());
}

#[rstest]
#[case(0x7f, 127)]
#[case(0x80, -128)]
#[case(0xff, -1)]
#[case(0x00, 0)]
fn test_sign_extend_incline(#[case] raw: u64, #[case] value: i64) {
    assert_eq!(sign_extend_incline(&LutGeometry::default(), raw), value);
}

#[test]
fn test_interpolate() {
    let g = LutGeometry::default();
    assert_eq!(interpolate(&g, 2, 3, 100, 0x01), 135);
    assert_eq!(interpolate(&g, 2, 3, 100, 0xff), 65);
    assert_eq!(interpolate(&g, 15, 15, 10, 0xfe), 0xffff_fe0c);
}
