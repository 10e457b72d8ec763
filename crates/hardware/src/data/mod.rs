//! Test data: bitstreams, vectors and golden outputs.
//!
//! This module owns everything a run reads but never modifies. It provides:
//! 1. **Bitstreams:** Per-bank ordered configuration words.
//! 2. **Vectors:** Case A and case B inputs paired with golden outputs.
//! 3. **Generation:** Random cores and their golden vectors, as JSON or C arrays.

/// Per-bank bitstreams.
pub mod bitstream;
/// Golden data generation.
pub mod generate;
/// Test vectors and the `TestData` document.
pub mod vectors;

pub use bitstream::{Bitstream, BitstreamStore};
pub use generate::{GenerateOptions, Generated, emit_c_header, generate};
pub use vectors::{SingleInputVectors, TestData, TripleInputVectors};
