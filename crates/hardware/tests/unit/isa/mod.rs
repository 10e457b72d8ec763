//! Custom instruction tests.

/// Unit tests for the disassembler.
pub mod disasm;
