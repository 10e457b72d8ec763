//! Global Harness Constants.
//!
//! This module defines constants shared across the harness. It includes:
//! 1. **Status Register Layout:** Bit positions and masks of the per-bank status word.
//! 2. **Sentinels:** Deterministic values returned before a bank has ever been reset.
//! 3. **Signalling:** The fatal trap code raised in silent mode.
//! 4. **Console Protocol:** Markers and prefixes of the diagnostic text stream.

/// Status bit: a configuration word was issued past the end of the register file.
pub const STATUS_E_INVALID_CFG: u64 = 1 << 0;

/// Status bit: an evaluate was issued before configuration completed.
pub const STATUS_E_PREMATURE_EXE: u64 = 1 << 1;

/// Status bit: the accelerator decoded an invalid instruction encoding.
pub const STATUS_E_INSTR_CODE: u64 = 1 << 2;

/// Mask covering the error-flag byte of the status word (bits 7:0).
pub const STATUS_FLAGS_MASK: u64 = 0xff;

/// Shift of the applied-configuration-word counter (bits 23:8).
pub const STATUS_CFG_COUNT_SHIFT: u32 = 8;

/// Mask of the applied-configuration-word counter after shifting.
pub const STATUS_CFG_COUNT_MASK: u64 = 0xffff;

/// Status read from a bank that has not been reset since power-on.
///
/// The simulated backend returns this deterministically; real hardware returns an
/// implementation-defined value. It must never be decoded as an error report.
pub const POWER_ON_STATUS: u64 = 0x0000_0000_affe_dead;

/// Value written to the trap register (`x31`) when a mismatch is observed in silent mode.
pub const FATAL_TRAP_CODE: u64 = 0xdead;

/// Exit signal value meaning "no exit requested yet".
pub const EXIT_SIGNAL_IDLE: u64 = u64::MAX;

/// Width of a hexadecimal field in the diagnostic protocol.
pub const HEX_FIELD_WIDTH: usize = 16;

/// First byte of the completion terminator.
pub const TERMINATOR_LEAD: u8 = 0x00;

/// Last byte of the completion terminator.
pub const TERMINATOR_TAIL: u8 = b'\n';
