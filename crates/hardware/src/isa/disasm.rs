//! LUT instruction disassembler.
//!
//! Converts an encoding into the assembler syntax used by the bring-up firmware,
//! for op tracing and the CLI `decode` command.
//!
//! # Usage
//!
//! ```
//! use lutsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0000_700b), ".word 0x0000700b");
//! ```

use std::fmt;

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::LutInstruction;

impl fmt::Display for LutInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.mnemonic();
        match *self {
            Self::Reset { bank } => write!(f, "{m} zero, {bank}, reset"),
            Self::Load { bank, rs1 } => write!(f, "{m} {}, {bank}, load", reg_name(rs1)),
            Self::Evaluate { bank, rd, rs1 } => {
                write!(f, "{m} {}, {}, {bank}", reg_name(rd), reg_name(rs1))
            }
            Self::Evaluate3 {
                bank,
                rd,
                rs1,
                rs2,
                rs3,
            } => write!(
                f,
                "{m} {}, {}, {}, {}, {bank}",
                reg_name(rd),
                reg_name(rs1),
                reg_name(rs2),
                reg_name(rs3)
            ),
            Self::Status { bank, rd } => write!(f, "{m} {}, {bank}", reg_name(rd)),
        }
    }
}

/// Disassembles a 32-bit word; non-LUT encodings render as a `.word` directive.
pub fn disassemble(inst: u32) -> String {
    decode(inst).map_or_else(|| format!(".word {inst:#010x}"), |i| i.to_string())
}
