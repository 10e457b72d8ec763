//! Input decoder stage.
//!
//! Each decoder output bit samples one chosen bit of the concatenated evaluate
//! operands. Outputs are stored as one-hot masks over the input; an all-zero
//! mask (unused output) always reads zero.

use rand::Rng;

use crate::common::{ConfigWord, LutError};
use crate::lut::geometry::{LutGeometry, join_words, split_words};

/// Compiled input decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDecoder {
    masks: Vec<u128>,
}

impl InputDecoder {
    /// Builds a decoder where output `i` samples input bit `choices[i]`.
    ///
    /// Outputs beyond `choices.len()` are unused.
    ///
    /// # Errors
    ///
    /// Returns `LutError::Choice` for a bit outside the input, or
    /// `LutError::Geometry` if more choices than decoder outputs are given.
    pub fn from_choices(geometry: &LutGeometry, choices: &[u32]) -> Result<Self, LutError> {
        let outputs = geometry.decoder_outputs() as usize;
        if choices.len() > outputs {
            return Err(LutError::Geometry(format!(
                "{} decoder choices for {outputs} outputs",
                choices.len()
            )));
        }
        let width = geometry.input_bits();
        let mut masks = vec![0u128; outputs];
        for (mask, &choice) in masks.iter_mut().zip(choices) {
            if choice >= width {
                return Err(LutError::Choice { choice, width });
            }
            *mask = 1u128 << choice;
        }
        Ok(Self { masks })
    }

    /// Random decoder. With `single_input`, choices stay within the first operand.
    pub fn random<R: Rng + ?Sized>(geometry: &LutGeometry, rng: &mut R, single_input: bool) -> Self {
        let width = if single_input {
            geometry.word_size
        } else {
            geometry.input_bits()
        };
        let masks = (0..geometry.decoder_outputs())
            .map(|_| 1u128 << rng.gen_range(0..width))
            .collect();
        Self { masks }
    }

    /// Decodes `input` into selector and interpolation bits.
    ///
    /// Bit `i` of the result is set when input bit selected by output `i` is set.
    pub fn evaluate(&self, input: u128) -> u64 {
        self.masks
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &m)| acc | (u64::from(input & m != 0) << i))
    }

    /// Configuration words in hardware order (output 0 first, little-endian chunks).
    pub fn words(&self, geometry: &LutGeometry) -> Vec<ConfigWord> {
        let per_bit = geometry.idec_regs_per_bit();
        self.masks
            .iter()
            .flat_map(|&m| split_words(m, per_bit, geometry.cfg_word_size))
            .map(ConfigWord)
            .collect()
    }

    /// Rebuilds a decoder from its configuration words.
    ///
    /// # Errors
    ///
    /// Returns `LutError::BitstreamLength` if `words` is not exactly the decoder section.
    pub fn from_words(geometry: &LutGeometry, words: &[ConfigWord]) -> Result<Self, LutError> {
        let expected = geometry.idec_register_count();
        if words.len() != expected {
            return Err(LutError::BitstreamLength {
                len: words.len(),
                expected,
            });
        }
        let raw: Vec<u64> = words.iter().map(|w| w.get()).collect();
        let masks = raw
            .chunks(geometry.idec_regs_per_bit())
            .map(|c| join_words(c, geometry.cfg_word_size))
            .collect();
        Ok(Self { masks })
    }

    /// Per-output input masks.
    pub fn masks(&self) -> &[u128] {
        &self.masks
    }
}
