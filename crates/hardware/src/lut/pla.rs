//! Address translator stage (programmable logic array).
//!
//! Maps selector bits to a lookup table address. Each address bit is a sum (OR)
//! of product terms (AND of selector literals). The AND plane holds one row per
//! interconnect; the OR plane one column per address bit.
//!
//! AND-row layout: bit `c` requires selector bit `c` clear, bit `c + selector_bits`
//! requires it set. An all-zero row is always true.

use std::collections::BTreeSet;

use rand::Rng;

use crate::common::{ConfigWord, LutError};
use crate::lut::geometry::{LutGeometry, join_words, mask64, split_words};

/// One product term over the selector bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product {
    /// Selector bits that must be set.
    pub positive: u64,
    /// Selector bits that must be clear.
    pub negative: u64,
}

impl Product {
    /// Parses `[0-9]*(![0-9]*)?`: digits before `!` are positive literals, after it negative.
    ///
    /// # Errors
    ///
    /// Returns `LutError::Product` for characters other than digits and one `!`, or a
    /// literal outside the selector.
    pub fn parse(geometry: &LutGeometry, raw: &str) -> Result<Self, LutError> {
        let invalid = |reason| LutError::Product {
            term: raw.to_string(),
            reason,
        };
        let (pos, neg) = raw.split_once('!').unwrap_or((raw, ""));
        let literals = |s: &str| -> Result<u64, LutError> {
            s.chars().try_fold(0u64, |acc, c| {
                let bit = c.to_digit(10).ok_or_else(|| invalid("expected digit"))?;
                if bit >= geometry.selector_bits {
                    return Err(invalid("literal outside selector"));
                }
                Ok(acc | (1 << bit))
            })
        };
        Ok(Self {
            positive: literals(pos.trim())?,
            negative: literals(neg.trim())?,
        })
    }

    /// AND-plane row encoding of this product.
    pub const fn row(&self, geometry: &LutGeometry) -> u64 {
        self.negative | (self.positive << geometry.selector_bits)
    }
}

/// Compiled address translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressTranslator {
    and_plane: Vec<u64>,
    or_plane: Vec<u64>,
}

impl AddressTranslator {
    /// Compiles one sum of products per address bit.
    ///
    /// Distinct products are assigned interconnects in sorted order; unused rows and
    /// columns are zero.
    ///
    /// # Errors
    ///
    /// Returns `LutError::TooManyOutputs` or `LutError::TooManyProducts` if the sums
    /// cannot be represented by the geometry.
    pub fn compile(geometry: &LutGeometry, sums: &[Vec<Product>]) -> Result<Self, LutError> {
        let outputs = geometry.segment_bits as usize;
        if sums.len() > outputs {
            return Err(LutError::TooManyOutputs {
                outputs: sums.len(),
                max: outputs,
            });
        }

        let products: BTreeSet<u64> = sums.iter().flatten().map(|p| p.row(geometry)).collect();
        let interconnects = geometry.pla_interconnects as usize;
        if products.len() > interconnects {
            return Err(LutError::TooManyProducts {
                products: products.len(),
                max: interconnects,
            });
        }

        let rows: Vec<u64> = products.into_iter().collect();
        let mut and_plane = rows.clone();
        and_plane.resize(interconnects, 0);

        let mut or_plane: Vec<u64> = sums
            .iter()
            .map(|sum| {
                sum.iter()
                    .filter_map(|p| rows.binary_search(&p.row(geometry)).ok())
                    .fold(0u64, |acc, i| acc | (1 << i))
            })
            .collect();
        or_plane.resize(outputs, 0);

        Ok(Self {
            and_plane,
            or_plane,
        })
    }

    /// Compiles comma-separated product strings, one per address bit (e.g. `"01!2,3"`).
    ///
    /// # Errors
    ///
    /// Propagates parse and representation errors.
    pub fn from_terms(geometry: &LutGeometry, terms: &[&str]) -> Result<Self, LutError> {
        let sums = terms
            .iter()
            .map(|t| {
                t.split(',')
                    .map(|p| Product::parse(geometry, p))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::compile(geometry, &sums)
    }

    /// Random translator: one product per address bit, each selector literal
    /// positive, negative, or absent.
    ///
    /// # Errors
    ///
    /// Returns `LutError::TooManyProducts` if the geometry has fewer interconnects than
    /// address bits and the draw produced too many distinct products.
    pub fn random<R: Rng + ?Sized>(geometry: &LutGeometry, rng: &mut R) -> Result<Self, LutError> {
        let sums: Vec<Vec<Product>> = (0..geometry.segment_bits)
            .map(|_| {
                let mut product = Product::default();
                for bit in 0..geometry.selector_bits {
                    match rng.gen_range(0..4) {
                        0 => product.positive |= 1 << bit,
                        1 => product.negative |= 1 << bit,
                        _ => {}
                    }
                }
                vec![product]
            })
            .collect();
        Self::compile(geometry, &sums)
    }

    /// Translates a selector into a table address.
    pub fn evaluate(&self, geometry: &LutGeometry, selector: u64) -> u64 {
        let sel_bits = geometry.selector_bits;
        let sel = selector & mask64(sel_bits);
        let expanded = (!sel & mask64(sel_bits)) | (sel << sel_bits);

        let and_eval = self
            .and_plane
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &row)| {
                acc | (u64::from(expanded & row == row) << i)
            });

        self.or_plane
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &col)| {
                acc | (u64::from(and_eval & col != 0) << i)
            })
    }

    /// AND-plane words followed by OR-plane words, in hardware order.
    pub fn words(&self, geometry: &LutGeometry) -> Vec<ConfigWord> {
        let cfg = geometry.cfg_word_size;
        let and_words = self
            .and_plane
            .iter()
            .flat_map(|&r| split_words(r as u128, geometry.pla_and_regs_per_row(), cfg));
        let or_words = self
            .or_plane
            .iter()
            .flat_map(|&c| split_words(c as u128, geometry.pla_or_regs_per_column(), cfg));
        and_words.chain(or_words).map(ConfigWord).collect()
    }

    /// Rebuilds a translator from its AND-plane and OR-plane words.
    ///
    /// # Errors
    ///
    /// Returns `LutError::BitstreamLength` if either section has the wrong size.
    pub fn from_words(
        geometry: &LutGeometry,
        and_words: &[ConfigWord],
        or_words: &[ConfigWord],
    ) -> Result<Self, LutError> {
        let expected = geometry.pla_and_register_count() + geometry.pla_or_register_count();
        if and_words.len() != geometry.pla_and_register_count()
            || or_words.len() != geometry.pla_or_register_count()
        {
            return Err(LutError::BitstreamLength {
                len: and_words.len() + or_words.len(),
                expected,
            });
        }
        let cfg = geometry.cfg_word_size;
        let unpack = |words: &[ConfigWord], per: usize| -> Vec<u64> {
            let raw: Vec<u64> = words.iter().map(|w| w.get()).collect();
            raw.chunks(per).map(|c| join_words(c, cfg) as u64).collect()
        };
        Ok(Self {
            and_plane: unpack(and_words, geometry.pla_and_regs_per_row()),
            or_plane: unpack(or_words, geometry.pla_or_regs_per_column()),
        })
    }

    /// AND-plane rows, one per interconnect.
    pub fn and_plane(&self) -> &[u64] {
        &self.and_plane
    }

    /// OR-plane columns, one per address bit.
    pub fn or_plane(&self) -> &[u64] {
        &self.or_plane
    }
}
