//! Instruction encoding utilities.
//!
//! Provides bit extraction for the R and R4 instruction formats and the
//! `LutInstruction` type describing one custom accelerator instruction.

use crate::common::Bank;
use crate::isa::opcodes::{
    FUNCT3_LUTE, FUNCT3_LUTE3, FUNCT3_LUTL, FUNCT3_LUTS, LUTL_LOAD, OP_CUSTOM_0, SEL_BANK,
};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct2 field (bits 25-26) of R4-type encodings.
pub const FUNCT2_MASK: u32 = 0x3;

/// Field extraction for 32-bit instruction encodings.
pub trait InstructionBits {
    /// Opcode field (bits 0-6).
    fn opcode(&self) -> u32;
    /// Destination register (bits 7-11).
    fn rd(&self) -> usize;
    /// First source register (bits 15-19).
    fn rs1(&self) -> usize;
    /// Second source register (bits 20-24).
    fn rs2(&self) -> usize;
    /// Third source register of R4-type encodings (bits 27-31).
    fn rs3(&self) -> usize;
    /// funct3 field (bits 12-14).
    fn funct3(&self) -> u32;
    /// funct7 field (bits 25-31).
    fn funct7(&self) -> u32;
    /// funct2 field of R4-type encodings (bits 25-26).
    fn funct2(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> 27) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn funct2(&self) -> u32 {
        (self >> 25) & FUNCT2_MASK
    }
}

/// One custom accelerator instruction with its register operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LutInstruction {
    /// `lutl zero, bank, reset`: clear the bank configuration.
    Reset {
        /// Target bank.
        bank: Bank,
    },
    /// `lutl rs1, bank, load`: append the word held in `rs1`.
    Load {
        /// Target bank.
        bank: Bank,
        /// Register holding the configuration word.
        rs1: usize,
    },
    /// `lute rd, rs1, bank`: single-input evaluate.
    Evaluate {
        /// Target bank.
        bank: Bank,
        /// Result register.
        rd: usize,
        /// Operand register.
        rs1: usize,
    },
    /// `lute3 rd, rs1, rs2, rs3, bank`: triple-input evaluate.
    Evaluate3 {
        /// Target bank.
        bank: Bank,
        /// Result register.
        rd: usize,
        /// First operand register.
        rs1: usize,
        /// Second operand register.
        rs2: usize,
        /// Third operand register.
        rs3: usize,
    },
    /// `luts rd, bank`: read the status register.
    Status {
        /// Target bank.
        bank: Bank,
        /// Result register.
        rd: usize,
    },
}

/// Packs an R-type encoding.
const fn r_type(funct7: u32, rs2: usize, rs1: usize, funct3: u32, rd: usize) -> u32 {
    ((funct7 & FUNCT7_MASK) << 25)
        | (((rs2 as u32) & REG_MASK) << 20)
        | (((rs1 as u32) & REG_MASK) << 15)
        | ((funct3 & FUNCT3_MASK) << 12)
        | (((rd as u32) & REG_MASK) << 7)
        | OP_CUSTOM_0
}

/// Packs an R4-type encoding.
const fn r4_type(rs3: usize, funct2: u32, rs2: usize, rs1: usize, funct3: u32, rd: usize) -> u32 {
    (((rs3 as u32) & REG_MASK) << 27)
        | ((funct2 & FUNCT2_MASK) << 25)
        | (((rs2 as u32) & REG_MASK) << 20)
        | (((rs1 as u32) & REG_MASK) << 15)
        | ((funct3 & FUNCT3_MASK) << 12)
        | (((rd as u32) & REG_MASK) << 7)
        | OP_CUSTOM_0
}

/// Bank selector bit for `funct7` / `funct2`.
pub const fn bank_bits(bank: Bank) -> u32 {
    match bank {
        Bank::Bank0 => 0,
        Bank::Bank1 => SEL_BANK,
    }
}

impl LutInstruction {
    /// Bank addressed by the instruction.
    pub const fn bank(&self) -> Bank {
        match *self {
            Self::Reset { bank }
            | Self::Load { bank, .. }
            | Self::Evaluate { bank, .. }
            | Self::Evaluate3 { bank, .. }
            | Self::Status { bank, .. } => bank,
        }
    }

    /// Assembler mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::Reset { .. } | Self::Load { .. } => "lutl",
            Self::Evaluate { .. } => "lute",
            Self::Evaluate3 { .. } => "lute3",
            Self::Status { .. } => "luts",
        }
    }

    /// Encodes the instruction into its 32-bit form.
    pub const fn encode(&self) -> u32 {
        match *self {
            Self::Reset { bank } => r_type(bank_bits(bank), 0, 0, FUNCT3_LUTL, 0),
            Self::Load { bank, rs1 } => {
                r_type(bank_bits(bank) | LUTL_LOAD, 0, rs1, FUNCT3_LUTL, 0)
            }
            Self::Evaluate { bank, rd, rs1 } => r_type(bank_bits(bank), 0, rs1, FUNCT3_LUTE, rd),
            Self::Evaluate3 {
                bank,
                rd,
                rs1,
                rs2,
                rs3,
            } => r4_type(rs3, bank_bits(bank), rs2, rs1, FUNCT3_LUTE3, rd),
            Self::Status { bank, rd } => r_type(bank_bits(bank), 0, 0, FUNCT3_LUTS, rd),
        }
    }
}
