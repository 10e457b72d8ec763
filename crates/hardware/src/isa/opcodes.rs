//! LUT accelerator opcodes and function codes.
//!
//! All four operations live in the RISC-V `custom-0` major opcode and are
//! distinguished by `funct3`. The bank and mode selectors travel in `funct7`
//! (R-type) or `funct2` (R4-type, `lute3`).

/// RISC-V `custom-0` major opcode.
pub const OP_CUSTOM_0: u32 = 0b0001011;

/// `lutl`: reset a bank or append one configuration word (R-type).
pub const FUNCT3_LUTL: u32 = 0b000;

/// `lute`: single-input evaluate (R-type).
pub const FUNCT3_LUTE: u32 = 0b001;

/// `luts`: read the bank status register (R-type).
pub const FUNCT3_LUTS: u32 = 0b010;

/// `lute3`: triple-input evaluate (R4-type).
pub const FUNCT3_LUTE3: u32 = 0b011;

/// `funct7` / `funct2` bit selecting the bank.
pub const SEL_BANK: u32 = 0b01;

/// `lutl` `funct7` bit: set to load `rs1` as a configuration word, clear to reset.
pub const LUTL_LOAD: u32 = 0b10;

/// Valid `funct7` bits for `lutl`.
pub const LUTL_FUNCT7_MASK: u32 = SEL_BANK | LUTL_LOAD;

/// Valid `funct7` bits for `lute` and `luts`.
pub const LUTE_FUNCT7_MASK: u32 = SEL_BANK;

/// Valid `funct2` bits for `lute3`.
pub const LUTE3_FUNCT2_MASK: u32 = SEL_BANK;
