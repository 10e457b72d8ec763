//! RoCC backend: issues the custom instructions directly.
//!
//! The hardware owns all state; this backend owns nothing and never fails. The
//! bank selector is an instruction immediate, so each operation dispatches to one
//! of two `asm!` blocks.

use core::arch::asm;

use crate::accel::{Accelerator, BackendType};
use crate::common::{AccelError, Bank, ConfigWord, StatusWord};
use crate::isa::opcodes::{
    FUNCT3_LUTE, FUNCT3_LUTE3, FUNCT3_LUTL, FUNCT3_LUTS, LUTL_LOAD, OP_CUSTOM_0, SEL_BANK,
};

/// Hardware LUT accelerator attached to the core.
#[derive(Debug, Default)]
pub struct RoccAccelerator;

impl RoccAccelerator {
    /// Handle to the attached accelerator.
    pub const fn new() -> Self {
        Self
    }
}

macro_rules! per_bank {
    ($bank:expr, |$sel:ident| $body:block) => {
        match $bank {
            Bank::Bank0 => {
                const $sel: u32 = 0;
                $body
            }
            Bank::Bank1 => {
                const $sel: u32 = SEL_BANK;
                $body
            }
        }
    };
}

impl Accelerator for RoccAccelerator {
    fn backend_type(&self) -> BackendType {
        BackendType::Rocc
    }

    fn reset(&mut self, bank: Bank) -> Result<(), AccelError> {
        per_bank!(bank, |SEL| {
            // SAFETY: `lutl` with the load bit clear only touches accelerator state.
            unsafe {
                asm!(
                    ".insn r {op}, {f3}, {f7}, x0, x0, x0",
                    op = const OP_CUSTOM_0,
                    f3 = const FUNCT3_LUTL,
                    f7 = const SEL,
                    options(nostack),
                );
            }
        });
        Ok(())
    }

    fn load(&mut self, bank: Bank, word: ConfigWord) -> Result<(), AccelError> {
        let word = word.get();
        per_bank!(bank, |SEL| {
            // SAFETY: `lutl` reads `rs1` and writes accelerator state only.
            unsafe {
                asm!(
                    ".insn r {op}, {f3}, {f7}, x0, {rs1}, x0",
                    op = const OP_CUSTOM_0,
                    f3 = const FUNCT3_LUTL,
                    f7 = const SEL | LUTL_LOAD,
                    rs1 = in(reg) word,
                    options(nostack),
                );
            }
        });
        Ok(())
    }

    fn evaluate(&mut self, bank: Bank, input: u64) -> Result<u64, AccelError> {
        let result: u64;
        per_bank!(bank, |SEL| {
            // SAFETY: `lute` reads `rs1` and writes only `rd`.
            unsafe {
                asm!(
                    ".insn r {op}, {f3}, {f7}, {rd}, {rs1}, x0",
                    op = const OP_CUSTOM_0,
                    f3 = const FUNCT3_LUTE,
                    f7 = const SEL,
                    rd = lateout(reg) result,
                    rs1 = in(reg) input,
                    options(nostack),
                );
            }
        });
        Ok(result)
    }

    fn evaluate3(&mut self, bank: Bank, a: u64, b: u64, c: u64) -> Result<u64, AccelError> {
        let result: u64;
        per_bank!(bank, |SEL| {
            // SAFETY: `lute3` reads `rs1`..`rs3` and writes only `rd`.
            unsafe {
                asm!(
                    ".insn r4 {op}, {f3}, {f2}, {rd}, {rs1}, {rs2}, {rs3}",
                    op = const OP_CUSTOM_0,
                    f3 = const FUNCT3_LUTE3,
                    f2 = const SEL,
                    rd = lateout(reg) result,
                    rs1 = in(reg) a,
                    rs2 = in(reg) b,
                    rs3 = in(reg) c,
                    options(nostack),
                );
            }
        });
        Ok(result)
    }

    fn status(&mut self, bank: Bank) -> Result<StatusWord, AccelError> {
        let raw: u64;
        per_bank!(bank, |SEL| {
            // SAFETY: `luts` writes only `rd`.
            unsafe {
                asm!(
                    ".insn r {op}, {f3}, {f7}, {rd}, x0, x0",
                    op = const OP_CUSTOM_0,
                    f3 = const FUNCT3_LUTS,
                    f7 = const SEL,
                    rd = lateout(reg) raw,
                    options(nostack),
                );
            }
        });
        Ok(StatusWord(raw))
    }
}
