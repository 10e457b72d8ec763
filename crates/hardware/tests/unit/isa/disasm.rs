//! # Disassembler Tests
//!
//! This module verifies the assembler syntax produced for each LUT instruction.

use lutsim_core::isa::disassemble;
use rstest::rstest;

#[rstest]
#[case(0x0000_000b, "lutl zero, 0, reset")]
#[case(0x0405_800b, "lutl a1, 0, load")]
#[case(0x0205_950b, "lute a0, a1, 1")]
#[case(0x68c5_b50b, "lute3 a0, a1, a2, a3, 0")]
#[case(0x0000_250b, "luts a0, 0")]
fn test_disassemble(#[case] word: u32, #[case] text: &str) {
    assert_eq!(disassemble(word), text);
}

#[test]
fn test_unknown_word_renders_as_directive() {
    assert_eq!(disassemble(0x0000_0013), ".word 0x00000013");
}
