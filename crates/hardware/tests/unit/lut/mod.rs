//! LUT core model tests.
//!
//! This module verifies the geometry arithmetic, each pipeline stage in
//! isolation, and the complete core including its bitstream format.



/// Unit tests for the decoder, translator, table and interpolator stages.
pub mod stages;
