//! Configuration and status word types.
//!
//! Both are 64-bit values crossing the accelerator boundary. `ConfigWord` is opaque to the
//! harness; `StatusWord` carries the bank's error flags and applied-word counter.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{
    POWER_ON_STATUS, STATUS_CFG_COUNT_MASK, STATUS_CFG_COUNT_SHIFT, STATUS_E_INSTR_CODE,
    STATUS_E_INVALID_CFG, STATUS_E_PREMATURE_EXE, STATUS_FLAGS_MASK,
};

/// One configuration word of a bank bitstream.
///
/// Order-significant and immutable once loaded. The harness never interprets its bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigWord(pub u64);

impl ConfigWord {
    /// Returns the raw 64-bit value.
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ConfigWord {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::LowerHex for ConfigWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Raw value of a bank status register.
///
/// Layout:
///
/// * bit 0: `e_invalid_cfg`: configuration issued past the register file.
/// * bit 1: `e_premature_exe`: evaluate issued before configuration completed.
/// * bit 2: `e_instr_code`: invalid instruction encoding.
/// * bits 23:8: number of configuration words applied since the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusWord(pub u64);

impl StatusWord {
    /// Builds a status word from its fields.
    pub const fn from_parts(flags: u64, cfg_count: u64) -> Self {
        Self(
            (flags & STATUS_FLAGS_MASK)
                | ((cfg_count & STATUS_CFG_COUNT_MASK) << STATUS_CFG_COUNT_SHIFT),
        )
    }

    /// Returns the raw register value.
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// True if this is the deterministic pre-reset sentinel.
    pub const fn is_power_on(self) -> bool {
        self.0 == POWER_ON_STATUS
    }

    /// Error-flag byte. Always zero for the power-on sentinel.
    pub const fn flags(self) -> u64 {
        if self.is_power_on() {
            0
        } else {
            self.0 & STATUS_FLAGS_MASK
        }
    }

    /// Number of configuration words applied since reset.
    pub const fn cfg_count(self) -> u64 {
        if self.is_power_on() {
            0
        } else {
            (self.0 >> STATUS_CFG_COUNT_SHIFT) & STATUS_CFG_COUNT_MASK
        }
    }

    /// A configuration word overflowed the register file.
    pub const fn invalid_cfg(self) -> bool {
        self.flags() & STATUS_E_INVALID_CFG != 0
    }

    /// An evaluate was issued before configuration completed.
    pub const fn premature_exe(self) -> bool {
        self.flags() & STATUS_E_PREMATURE_EXE != 0
    }

    /// An invalid instruction encoding was decoded.
    pub const fn instr_code(self) -> bool {
        self.flags() & STATUS_E_INSTR_CODE != 0
    }

    /// True if any error flag is set. The power-on sentinel never reports errors.
    pub const fn has_errors(self) -> bool {
        self.flags() != 0
    }
}

impl fmt::Display for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_power_on() {
            return write!(f, "power-on ({:#018x})", self.0);
        }
        write!(
            f,
            "cfg_count={} invalid_cfg={} premature_exe={} instr_code={}",
            self.cfg_count(),
            self.invalid_cfg(),
            self.premature_exe(),
            self.instr_code()
        )
    }
}

impl fmt::LowerHex for StatusWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
