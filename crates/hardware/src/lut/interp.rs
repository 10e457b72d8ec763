//! Linear interpolator stage.
//!
//! `result = base + ((selector << interpolation_bits) | interpolator) * incline`,
//! with `incline` sign-extended and the sum wrapped to `output_bits`.

use crate::lut::geometry::{LutGeometry, mask64};

/// Sign-extends an `incline_bits`-wide incline.
pub const fn sign_extend_incline(geometry: &LutGeometry, incline: u64) -> i64 {
    let bits = geometry.incline_bits;
    if bits >= 64 {
        return incline as i64;
    }
    let shift = 64 - bits;
    ((incline << shift) as i64) >> shift
}

/// Runs the interpolator.
pub const fn interpolate(
    geometry: &LutGeometry,
    selector: u64,
    interpolator: u64,
    base: u64,
    incline: u64,
) -> u64 {
    let incline = sign_extend_incline(geometry, incline);
    let mult = (selector << geometry.interpolation_bits) | interpolator;
    let sum = (base as i64).wrapping_add((mult as i64).wrapping_mul(incline));
    (sum as u64) & mask64(geometry.output_bits)
}
