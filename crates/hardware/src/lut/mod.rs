//! LUT core reference model.
//!
//! The accelerator evaluates a fixed pipeline per bank:
//! 1. **Input decoder:** picks selector and interpolation bits from the operands.
//! 2. **Address translator:** a PLA mapping selector bits to a table address.
//! 3. **Lookup table:** cells of `(base, incline)`.
//! 4. **Interpolator:** `base + ((selector << n) | interp) * incline`.
//!
//! The model is used to generate test data and to back the simulated accelerator
//! with real bitstream semantics.

/// Top-level core and bitstream (de)compilation.
pub mod core;
/// Pipeline widths and configuration register layout.
pub mod geometry;
/// Input decoder.
pub mod idec;
/// Interpolator arithmetic.
pub mod interp;
/// Address translator (PLA).
pub mod pla;
/// Lookup table.
pub mod table;

pub use self::core::{LutCore, PipelineTrace};
pub use self::geometry::LutGeometry;
pub use self::idec::InputDecoder;
pub use self::pla::{AddressTranslator, Product};
pub use self::table::LookupTable;
