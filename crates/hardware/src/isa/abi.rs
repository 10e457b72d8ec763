//! RISC-V ABI register names for encoding and disassembling LUT instructions.
//!
//! The argument registers below are the conventional operands used when building
//! instructions by hand; the RoCC backend lets the compiler allocate its own.

/// Register x10 (a0): result register of `lute`, `lute3`, and `luts`.
pub const REG_A0: usize = 10;
/// Register x11 (a1): first operand / configuration word.
pub const REG_A1: usize = 11;
/// Register x12 (a2): second `lute3` operand.
pub const REG_A2: usize = 12;
/// Register x13 (a3): third `lute3` operand.
pub const REG_A3: usize = 13;

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name of register `x{index}`, or `"?"` for an out-of-range index.
pub fn reg_name(index: usize) -> &'static str {
    REG_NAMES.get(index).copied().unwrap_or("?")
}
