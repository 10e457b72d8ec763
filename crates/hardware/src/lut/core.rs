//! Complete LUT core: decoder, translator, table and interpolator.
//!
//! A bank bitstream is the lookup table section (random-access, natural order)
//! followed by the daisy chain. The chain is shifted in, so its words are
//! emitted in reverse: the last OR-plane word goes first and the first decoder
//! word goes last.

use rand::Rng;

use crate::common::{ConfigWord, LutError};
use crate::lut::geometry::{LutGeometry, mask64, mask128};
use crate::lut::idec::InputDecoder;
use crate::lut::interp::interpolate;
use crate::lut::pla::AddressTranslator;
use crate::lut::table::LookupTable;

/// Intermediate values of one pass through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineTrace {
    /// Concatenated decoder input.
    pub input: u128,
    /// Raw decoder output (interpolation bits low, selector bits high).
    pub decoded: u64,
    /// Selector field.
    pub selector: u64,
    /// Interpolation field.
    pub interpolator: u64,
    /// Translated table address.
    pub address: u64,
    /// Table cell read at `address`.
    pub cell: u64,
    /// Base field of `cell`.
    pub base: u64,
    /// Raw incline field of `cell`.
    pub incline: u64,
    /// Interpolator result.
    pub output: u64,
}

/// One bank's worth of LUT configuration and its evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LutCore {
    geometry: LutGeometry,
    decoder: InputDecoder,
    translator: AddressTranslator,
    table: LookupTable,
}

impl LutCore {
    /// Assembles a core from compiled stages.
    ///
    /// # Errors
    ///
    /// Returns `LutError::Geometry` if the geometry is invalid.
    pub fn new(
        geometry: LutGeometry,
        decoder: InputDecoder,
        translator: AddressTranslator,
        table: LookupTable,
    ) -> Result<Self, LutError> {
        geometry.validate()?;
        Ok(Self {
            geometry,
            decoder,
            translator,
            table,
        })
    }

    /// Random core. With `single_input`, the decoder only samples the first operand,
    /// so `lute` and `lute3` with matching first operand agree.
    ///
    /// # Errors
    ///
    /// Returns geometry or translator errors.
    pub fn random<R: Rng + ?Sized>(
        geometry: LutGeometry,
        rng: &mut R,
        single_input: bool,
    ) -> Result<Self, LutError> {
        geometry.validate()?;
        let decoder = InputDecoder::random(&geometry, rng, single_input);
        let translator = AddressTranslator::random(&geometry, rng)?;
        let table = LookupTable::random(&geometry, rng);
        Ok(Self {
            geometry,
            decoder,
            translator,
            table,
        })
    }

    /// Decompiles a bank bitstream.
    ///
    /// # Errors
    ///
    /// Returns `LutError::BitstreamLength` if `words` is not exactly one bank.
    pub fn from_bitstream(geometry: LutGeometry, words: &[ConfigWord]) -> Result<Self, LutError> {
        geometry.validate()?;
        let expected = geometry.register_count();
        if words.len() != expected {
            return Err(LutError::BitstreamLength {
                len: words.len(),
                expected,
            });
        }

        let (ram, chain) = words.split_at(geometry.lut_register_count());
        let chain: Vec<ConfigWord> = chain.iter().rev().copied().collect();
        let (idec, rest) = chain.split_at(geometry.idec_register_count());
        let (and_words, or_words) = rest.split_at(geometry.pla_and_register_count());

        Ok(Self {
            geometry,
            decoder: InputDecoder::from_words(&geometry, idec)?,
            translator: AddressTranslator::from_words(&geometry, and_words, or_words)?,
            table: LookupTable::from_words(&geometry, ram)?,
        })
    }

    /// Encodes the core as a bank bitstream in load order.
    pub fn bitstream(&self) -> Vec<ConfigWord> {
        let g = &self.geometry;
        let mut chain = self.decoder.words(g);
        chain.extend(self.translator.words(g));

        let mut words = self.table.words(g);
        words.extend(chain.into_iter().rev());
        words
    }

    /// Concatenates operands into the decoder input; operand 0 occupies the low bits.
    pub fn pack(&self, operands: &[u64]) -> u128 {
        let width = self.geometry.word_size;
        let word = mask64(width);
        let packed = operands
            .iter()
            .take(self.geometry.input_words as usize)
            .enumerate()
            .fold(0u128, |acc, (i, &op)| {
                acc | (u128::from(op & word) << (width as usize * i))
            });
        packed & mask128(self.geometry.input_bits())
    }

    /// Runs the pipeline and records each stage.
    pub fn trace(&self, input: u128) -> PipelineTrace {
        let g = &self.geometry;
        let decoded = self.decoder.evaluate(input);
        let interpolator = decoded & mask64(g.interpolation_bits);
        let selector = (decoded >> g.interpolation_bits) & mask64(g.selector_bits);
        let address = self.translator.evaluate(g, selector);
        let cell = self.table.evaluate(address);
        let (base, incline) = LookupTable::fields(g, cell);
        let output = interpolate(g, selector, interpolator, base, incline);
        PipelineTrace {
            input,
            decoded,
            selector,
            interpolator,
            address,
            cell,
            base,
            incline,
            output,
        }
    }

    /// Single-operand evaluate (`lute`); remaining operands read as zero.
    pub fn evaluate(&self, input: u64) -> u64 {
        self.trace(self.pack(&[input])).output
    }

    /// Three-operand evaluate (`lute3`).
    pub fn evaluate3(&self, a: u64, b: u64, c: u64) -> u64 {
        self.trace(self.pack(&[a, b, c])).output
    }

    /// Core geometry.
    pub const fn geometry(&self) -> &LutGeometry {
        &self.geometry
    }

    /// Input decoder stage.
    pub const fn decoder(&self) -> &InputDecoder {
        &self.decoder
    }

    /// Address translator stage.
    pub const fn translator(&self) -> &AddressTranslator {
        &self.translator
    }

    /// Lookup table stage.
    pub const fn table(&self) -> &LookupTable {
        &self.table
    }
}
