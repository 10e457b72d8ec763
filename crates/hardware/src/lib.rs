//! LUT accelerator bring-up harness library.
//!
//! This crate validates a custom lookup-table accelerator through its three
//! hardware operations (load configuration, evaluate, read status). It provides:
//! 1. **Accelerator:** The `Accelerator` trait, a simulated backend, a RoCC backend, and protocol wrappers.
//! 2. **Harness:** Loader, executor, verifier and reporting for the fixed bring-up sequence.
//! 3. **Data:** Bitstreams, test vectors, golden outputs and their generation.
//! 4. **LUT Core:** A software model of the accelerator pipeline and its bitstream format.
//! 5. **ISA:** Encoding, decoding and disassembly of the custom instructions.

/// Accelerator interface, backends and wrappers.
pub mod accel;
/// Common types and constants (banks, words, cases, errors).
pub mod common;
/// Harness configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// Bitstreams, vectors and test data generation.
pub mod data;
/// The bring-up test sequence.
pub mod harness;
/// Custom instruction encoding (opcodes, decode, disassembly).
pub mod isa;
/// LUT core pipeline model.
pub mod lut;

/// Accelerator trait implemented by every backend.
pub use crate::accel::Accelerator;
/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Test data document consumed by a run.
pub use crate::data::TestData;
/// Configured test sequence; construct with `Harness::new`.
pub use crate::harness::{Harness, Verdict};
