//! # Unit Components
//!
//! This module organizes the unit tests by harness layer, from the shared word
//! and bank types up to the complete bring-up sequence.

/// Unit tests for common types.
///
/// This module covers bank identifiers, status word decoding, case inputs,
/// and error formatting.
pub mod common;


/// Unit tests for the custom instruction encodings.
///
/// This module aggregates tests for:
/// - Instruction encoding and decoding.
/// - Disassembler output.
pub mod isa;

/// Unit tests for the LUT core model.
///
/// This module verifies each pipeline stage and the bitstream format.
pub mod lut;

/// Unit tests for the accelerator backends and wrappers.
pub mod accel;

/// Unit tests for test data parsing, validation and generation.
pub mod data;
