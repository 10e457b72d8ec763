//! LUT instruction decoder.
//!
//! Turns a 32-bit encoding back into a `LutInstruction`. Anything outside the
//! `custom-0` LUT encodings (wrong opcode, unknown `funct3`, stray selector bits,
//! non-zero unused register fields) is rejected; on hardware these set the
//! `e_instr_code` status flag.

use crate::common::Bank;
use crate::isa::instruction::{InstructionBits, LutInstruction};
use crate::isa::opcodes::{
    FUNCT3_LUTE, FUNCT3_LUTE3, FUNCT3_LUTL, FUNCT3_LUTS, LUTE_FUNCT7_MASK, LUTE3_FUNCT2_MASK,
    LUTL_FUNCT7_MASK, LUTL_LOAD, OP_CUSTOM_0, SEL_BANK,
};

const fn bank_of(sel: u32) -> Bank {
    if sel & SEL_BANK != 0 {
        Bank::Bank1
    } else {
        Bank::Bank0
    }
}

/// Decodes a LUT accelerator instruction.
///
/// Returns `None` if `inst` is not a valid LUT encoding.
pub fn decode(inst: u32) -> Option<LutInstruction> {
    if inst.opcode() != OP_CUSTOM_0 {
        return None;
    }

    match inst.funct3() {
        FUNCT3_LUTL => {
            let funct7 = inst.funct7();
            if funct7 & !LUTL_FUNCT7_MASK != 0 || inst.rd() != 0 || inst.rs2() != 0 {
                return None;
            }
            let bank = bank_of(funct7);
            if funct7 & LUTL_LOAD != 0 {
                Some(LutInstruction::Load {
                    bank,
                    rs1: inst.rs1(),
                })
            } else if inst.rs1() == 0 {
                Some(LutInstruction::Reset { bank })
            } else {
                None
            }
        }
        FUNCT3_LUTE => {
            let funct7 = inst.funct7();
            if funct7 & !LUTE_FUNCT7_MASK != 0 || inst.rs2() != 0 {
                return None;
            }
            Some(LutInstruction::Evaluate {
                bank: bank_of(funct7),
                rd: inst.rd(),
                rs1: inst.rs1(),
            })
        }
        FUNCT3_LUTS => {
            let funct7 = inst.funct7();
            if funct7 & !LUTE_FUNCT7_MASK != 0 || inst.rs1() != 0 || inst.rs2() != 0 {
                return None;
            }
            Some(LutInstruction::Status {
                bank: bank_of(funct7),
                rd: inst.rd(),
            })
        }
        FUNCT3_LUTE3 => {
            let funct2 = inst.funct2();
            if funct2 & !LUTE3_FUNCT2_MASK != 0 {
                return None;
            }
            Some(LutInstruction::Evaluate3 {
                bank: bank_of(funct2),
                rd: inst.rd(),
                rs1: inst.rs1(),
                rs2: inst.rs2(),
                rs3: inst.rs3(),
            })
        }
        _ => None,
    }
}
