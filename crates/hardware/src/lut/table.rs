//! Lookup table stage.
//!
//! A random-access RAM of `2^segment_bits` cells. Each cell packs an unsigned base
//! (high bits) above a signed incline (low bits). Unlike the daisy-chained decoder
//! and translator sections, table words are transmitted in natural order.

use rand::Rng;

use crate::common::{ConfigWord, LutError};
use crate::lut::geometry::{LutGeometry, join_words, mask64, split_words};

/// Compiled lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    cells: Vec<u64>,
}

impl LookupTable {
    /// Builds a table from explicit cells, masked to the cell width.
    ///
    /// # Errors
    ///
    /// Returns `LutError::BitstreamLength` if the cell count does not match the geometry.
    pub fn from_cells(geometry: &LutGeometry, cells: &[u64]) -> Result<Self, LutError> {
        if cells.len() != geometry.lut_cells() {
            return Err(LutError::BitstreamLength {
                len: cells.len(),
                expected: geometry.lut_cells(),
            });
        }
        let width = mask64(geometry.lut_cell_bits());
        Ok(Self {
            cells: cells.iter().map(|c| c & width).collect(),
        })
    }

    /// Random table.
    pub fn random<R: Rng + ?Sized>(geometry: &LutGeometry, rng: &mut R) -> Self {
        let width = mask64(geometry.lut_cell_bits());
        let cells = (0..geometry.lut_cells())
            .map(|_| rng.gen_range(0..=width))
            .collect();
        Self { cells }
    }

    /// Reads the cell at `address`.
    pub fn evaluate(&self, address: u64) -> u64 {
        let index = (address as usize) & (self.cells.len() - 1);
        self.cells[index]
    }

    /// Splits a cell into `(base, incline)` raw fields.
    pub const fn fields(geometry: &LutGeometry, cell: u64) -> (u64, u64) {
        let incline = cell & mask64(geometry.incline_bits);
        let base = (cell >> geometry.incline_bits) & mask64(geometry.base_bits);
        (base, incline)
    }

    /// Table words in natural cell order.
    pub fn words(&self, geometry: &LutGeometry) -> Vec<ConfigWord> {
        let per_cell = geometry.ram_regs_per_cell();
        self.cells
            .iter()
            .flat_map(|&c| split_words(c as u128, per_cell, geometry.cfg_word_size))
            .map(ConfigWord)
            .collect()
    }

    /// Rebuilds a table from its configuration words.
    ///
    /// # Errors
    ///
    /// Returns `LutError::BitstreamLength` if `words` is not exactly the table section.
    pub fn from_words(geometry: &LutGeometry, words: &[ConfigWord]) -> Result<Self, LutError> {
        let expected = geometry.lut_register_count();
        if words.len() != expected {
            return Err(LutError::BitstreamLength {
                len: words.len(),
                expected,
            });
        }
        let raw: Vec<u64> = words.iter().map(|w| w.get()).collect();
        let cells = raw
            .chunks(geometry.ram_regs_per_cell())
            .map(|c| join_words(c, geometry.cfg_word_size) as u64)
            .collect();
        Ok(Self { cells })
    }

    /// All cells in address order.
    pub fn cells(&self) -> &[u64] {
        &self.cells
    }
}
