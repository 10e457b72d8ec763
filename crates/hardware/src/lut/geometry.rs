//! LUT core geometry.
//!
//! The geometry fixes every width of the accelerator pipeline and, through them,
//! the size and layout of a bank's configuration register file.

use serde::Deserialize;

use crate::common::LutError;

/// Default geometry constants, matching the bring-up FPGA build.
mod defaults {
    /// Width of one evaluate operand in bits.
    pub const WORD_SIZE: u32 = 32;
    /// Operands per evaluate (`lute3` supplies three).
    pub const INPUT_WORDS: u32 = 3;
    /// Selector bits produced by the input decoder.
    pub const SELECTOR_BITS: u32 = 4;
    /// Interpolation bits produced by the input decoder.
    pub const INTERPOLATION_BITS: u32 = 4;
    /// Address bits of the lookup table (2^n cells).
    pub const SEGMENT_BITS: u32 = 4;
    /// Product terms available in the address translator.
    pub const PLA_INTERCONNECTS: u32 = 8;
    /// Base field width of a lookup cell.
    pub const BASE_BITS: u32 = 16;
    /// Signed incline field width of a lookup cell.
    pub const INCLINE_BITS: u32 = 8;
    /// Payload bits per configuration register.
    pub const CFG_WORD_SIZE: u32 = 32;
    /// Width of the interpolator result.
    pub const OUTPUT_BITS: u32 = 32;
}

/// Widths of the LUT core pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LutGeometry {
    /// Width of one evaluate operand in bits.
    #[serde(default = "LutGeometry::default_word_size")]
    pub word_size: u32,
    /// Number of operands concatenated into the decoder input.
    #[serde(default = "LutGeometry::default_input_words")]
    pub input_words: u32,
    /// Selector bits (address translator input).
    #[serde(default = "LutGeometry::default_selector_bits")]
    pub selector_bits: u32,
    /// Interpolation bits (interpolator fraction).
    #[serde(default = "LutGeometry::default_interpolation_bits")]
    pub interpolation_bits: u32,
    /// Lookup table address bits.
    #[serde(default = "LutGeometry::default_segment_bits")]
    pub segment_bits: u32,
    /// Address translator product terms.
    #[serde(default = "LutGeometry::default_pla_interconnects")]
    pub pla_interconnects: u32,
    /// Unsigned base field of a lookup cell.
    #[serde(default = "LutGeometry::default_base_bits")]
    pub base_bits: u32,
    /// Signed incline field of a lookup cell.
    #[serde(default = "LutGeometry::default_incline_bits")]
    pub incline_bits: u32,
    /// Payload bits per configuration register.
    #[serde(default = "LutGeometry::default_cfg_word_size")]
    pub cfg_word_size: u32,
    /// Interpolator result width.
    #[serde(default = "LutGeometry::default_output_bits")]
    pub output_bits: u32,
}

impl LutGeometry {
    fn default_word_size() -> u32 {
        defaults::WORD_SIZE
    }

    fn default_input_words() -> u32 {
        defaults::INPUT_WORDS
    }

    fn default_selector_bits() -> u32 {
        defaults::SELECTOR_BITS
    }

    fn default_interpolation_bits() -> u32 {
        defaults::INTERPOLATION_BITS
    }

    fn default_segment_bits() -> u32 {
        defaults::SEGMENT_BITS
    }

    fn default_pla_interconnects() -> u32 {
        defaults::PLA_INTERCONNECTS
    }

    fn default_base_bits() -> u32 {
        defaults::BASE_BITS
    }

    fn default_incline_bits() -> u32 {
        defaults::INCLINE_BITS
    }

    fn default_cfg_word_size() -> u32 {
        defaults::CFG_WORD_SIZE
    }

    fn default_output_bits() -> u32 {
        defaults::OUTPUT_BITS
    }

    /// Checks that every width is representable by the model.
    ///
    /// # Errors
    ///
    /// Returns `LutError::Geometry` naming the first out-of-range parameter.
    pub fn validate(&self) -> Result<(), LutError> {
        let check = |ok: bool, what: &str| {
            if ok {
                Ok(())
            } else {
                Err(LutError::Geometry(what.to_string()))
            }
        };
        check((1..=64).contains(&self.word_size), "word_size must be 1..=64")?;
        check((1..=3).contains(&self.input_words), "input_words must be 1..=3")?;
        check(self.input_bits() <= 128, "word_size * input_words must be <= 128")?;
        check((1..=64).contains(&self.cfg_word_size), "cfg_word_size must be 1..=64")?;
        check((1..=10).contains(&self.selector_bits), "selector_bits must be 1..=10")?;
        check(self.decoder_outputs() <= 64, "selector_bits + interpolation_bits must be <= 64")?;
        check((1..=16).contains(&self.segment_bits), "segment_bits must be 1..=16")?;
        check((1..=64).contains(&self.pla_interconnects), "pla_interconnects must be 1..=64")?;
        check(self.incline_bits >= 1, "incline_bits must be >= 1")?;
        check(self.lut_cell_bits() <= 64, "base_bits + incline_bits must be <= 64")?;
        check((1..=64).contains(&self.output_bits), "output_bits must be 1..=64")?;
        Ok(())
    }

    /// Total decoder input width in bits.
    pub const fn input_bits(&self) -> u32 {
        self.word_size * self.input_words
    }

    /// Input decoder outputs (selector + interpolation bits).
    pub const fn decoder_outputs(&self) -> u32 {
        self.selector_bits + self.interpolation_bits
    }

    /// Lookup cell width in bits.
    pub const fn lut_cell_bits(&self) -> u32 {
        self.base_bits + self.incline_bits
    }

    /// Number of lookup cells.
    pub const fn lut_cells(&self) -> usize {
        1 << self.segment_bits
    }

    /// Configuration registers per input decoder output.
    pub const fn idec_regs_per_bit(&self) -> usize {
        self.input_bits().div_ceil(self.cfg_word_size) as usize
    }

    /// Configuration registers per lookup cell.
    pub const fn ram_regs_per_cell(&self) -> usize {
        self.lut_cell_bits().div_ceil(self.cfg_word_size) as usize
    }

    /// Configuration registers per AND-plane row.
    pub const fn pla_and_regs_per_row(&self) -> usize {
        (2 * self.selector_bits).div_ceil(self.cfg_word_size) as usize
    }

    /// Configuration registers per OR-plane column.
    pub const fn pla_or_regs_per_column(&self) -> usize {
        self.pla_interconnects.div_ceil(self.cfg_word_size) as usize
    }

    /// Registers holding the lookup table (random-access phase).
    pub const fn lut_register_count(&self) -> usize {
        self.lut_cells() * self.ram_regs_per_cell()
    }

    /// Registers holding the input decoder.
    pub const fn idec_register_count(&self) -> usize {
        self.decoder_outputs() as usize * self.idec_regs_per_bit()
    }

    /// Registers holding the AND plane.
    pub const fn pla_and_register_count(&self) -> usize {
        self.pla_interconnects as usize * self.pla_and_regs_per_row()
    }

    /// Registers holding the OR plane.
    pub const fn pla_or_register_count(&self) -> usize {
        self.segment_bits as usize * self.pla_or_regs_per_column()
    }

    /// Size of a complete bank bitstream.
    pub const fn register_count(&self) -> usize {
        self.lut_register_count()
            + self.idec_register_count()
            + self.pla_and_register_count()
            + self.pla_or_register_count()
    }
}

impl Default for LutGeometry {
    fn default() -> Self {
        Self {
            word_size: defaults::WORD_SIZE,
            input_words: defaults::INPUT_WORDS,
            selector_bits: defaults::SELECTOR_BITS,
            interpolation_bits: defaults::INTERPOLATION_BITS,
            segment_bits: defaults::SEGMENT_BITS,
            pla_interconnects: defaults::PLA_INTERCONNECTS,
            base_bits: defaults::BASE_BITS,
            incline_bits: defaults::INCLINE_BITS,
            cfg_word_size: defaults::CFG_WORD_SIZE,
            output_bits: defaults::OUTPUT_BITS,
        }
    }
}

/// Low `bits` set, saturating at 64.
#[inline]
pub const fn mask64(bits: u32) -> u64 {
    if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 }
}

/// Low `bits` set, saturating at 128.
#[inline]
pub const fn mask128(bits: u32) -> u128 {
    if bits >= 128 { u128::MAX } else { (1u128 << bits) - 1 }
}

/// Splits `value` into `count` little-endian chunks of `chunk_bits` each.
pub fn split_words(value: u128, count: usize, chunk_bits: u32) -> impl Iterator<Item = u64> {
    (0..count).map(move |i| {
        let shift = chunk_bits as usize * i;
        if shift >= 128 {
            0
        } else {
            ((value >> shift) & mask128(chunk_bits)) as u64
        }
    })
}

/// Joins little-endian `chunk_bits`-wide chunks back into one value.
pub fn join_words(chunks: &[u64], chunk_bits: u32) -> u128 {
    chunks.iter().enumerate().fold(0u128, |acc, (i, &w)| {
        let shift = chunk_bits as usize * i;
        if shift >= 128 {
            acc
        } else {
            acc | (((w as u128) & mask128(chunk_bits)) << shift)
        }
    })
}
