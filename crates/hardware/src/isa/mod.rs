//! LUT accelerator instruction set.
//!
//! The accelerator is reached through four custom instructions in the RISC-V
//! `custom-0` opcode space rather than through memory-mapped registers:
//!
//! * `lutl`: reset a bank, or append one configuration word.
//! * `lute`: evaluate one input against a bank.
//! * `lute3`: evaluate three inputs against a bank.
//! * `luts`: read a bank's status register.

/// ABI register names and the fixed operand registers.
pub mod abi;

/// Instruction decoding.
pub mod decode;

/// Instruction disassembler for op tracing and the CLI.
pub mod disasm;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Major opcode and function codes.
pub mod opcodes;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::LutInstruction;
