//! Golden test data generation.
//!
//! Draws random LUT cores, compiles their bitstreams, and computes golden outputs
//! for random inputs with the core model. With two banks, bank 1 holds a core
//! that samples only the first operand (case A, `lute`) and bank 0 a core over
//! all three operands (case B, `lute3`). With one bank, bank 0 serves both cases.

use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::common::{Bank, BankCount, DataError};
use crate::data::bitstream::BitstreamStore;
use crate::data::vectors::{SingleInputVectors, TestData, TripleInputVectors};
use crate::lut::geometry::mask64;
use crate::lut::{LutCore, LutGeometry};

/// Parameters of one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Core geometry.
    pub geometry: LutGeometry,
    /// Vectors per case.
    pub count: usize,
    /// RNG seed; the same seed reproduces the same data.
    pub seed: u64,
    /// Banks to populate.
    pub bank_count: BankCount,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            geometry: LutGeometry::default(),
            count: 50,
            seed: 0,
            bank_count: BankCount::default(),
        }
    }
}

/// Generated data together with the cores it was compiled from.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Bitstreams, vectors and golden outputs.
    pub data: TestData,
    /// Core loaded into each bank.
    pub cores: [Option<LutCore>; 2],
}

impl Generated {
    /// Core loaded into `bank`.
    pub fn core(&self, bank: Bank) -> Option<&LutCore> {
        self.cores[bank.index()].as_ref()
    }
}

/// Generates a complete, self-consistent data set.
///
/// # Errors
///
/// Returns `DataError` if the geometry cannot produce a core or the assembled
/// data is inconsistent.
pub fn generate(options: &GenerateOptions) -> Result<Generated, DataError> {
    let mut rng = StdRng::seed_from_u64(options.seed);
    let geometry = options.geometry;

    let triple_core = LutCore::random(geometry, &mut rng, false)?;
    let single_core = match options.bank_count {
        BankCount::One => None,
        BankCount::Two => Some(LutCore::random(geometry, &mut rng, true)?),
    };
    let case_a_core = single_core.as_ref().unwrap_or(&triple_core);

    let word = mask64(geometry.word_size);
    let inputs: Vec<u64> = (0..options.count).map(|_| rng.gen_range(0..=word)).collect();
    let expected = inputs.iter().map(|&x| case_a_core.evaluate(x)).collect();
    let single = SingleInputVectors::new(inputs, expected)?;

    let triples: Vec<[u64; 3]> = (0..options.count)
        .map(|_| [(); 3].map(|()| rng.gen_range(0..=word)))
        .collect();
    let expected = triples
        .iter()
        .map(|&[a, b, c]| triple_core.evaluate3(a, b, c))
        .collect();
    let triple = TripleInputVectors::from_triples(triples, expected)?;

    let bitstreams = BitstreamStore::new(
        Some(triple_core.bitstream()),
        single_core.as_ref().map(LutCore::bitstream),
    )?;

    info!(
        seed = options.seed,
        count = options.count,
        banks = %options.bank_count,
        words = geometry.register_count(),
        "generated test data"
    );

    Ok(Generated {
        data: TestData {
            bitstreams,
            single,
            triple,
        },
        cores: [Some(triple_core), single_core],
    })
}

fn write_array(out: &mut String, name: &str, size: &str, values: impl Iterator<Item = u64>) {
    let _ = writeln!(out, "uint64_t {name}[{size}] = {{");
    for v in values {
        let _ = writeln!(out, "    0x{v:016x}ULL,");
    }
    let _ = writeln!(out, "}};");
}

/// Renders `data` as C arrays for firmware builds.
///
/// With two banks, `bitstream` holds bank 1 (case A) and `bitstream3` bank 0
/// (case B); with one bank, `bitstream` holds bank 0. Vector arrays are
/// `input_vec` / `output_vec` and `input_vec3_{1,2,3}` / `output_vec3`.
pub fn emit_c_header(data: &TestData) -> String {
    let mut out = String::from("#include <stdint.h>\n\n");

    let bank0 = data.bitstreams.get(Bank::Bank0);
    let (case_a, case_b) = match data.bitstreams.get(Bank::Bank1) {
        Some(bank1) => (Some(bank1), bank0),
        None => (bank0, None),
    };
    let size = case_a.or(case_b).map_or(0, |b| b.len());
    let _ = writeln!(out, "#define BITSTREAM_SIZE {size}");
    if let Some(b) = case_a {
        let words = b.words().iter().map(|w| w.get());
        write_array(&mut out, "bitstream", "BITSTREAM_SIZE", words);
    }
    if let Some(b) = case_b {
        let words = b.words().iter().map(|w| w.get());
        write_array(&mut out, "bitstream3", "BITSTREAM_SIZE", words);
    }

    let _ = writeln!(out, "\n#define INPUT_SIZE {}", data.single.len());
    let single = &data.single;
    write_array(&mut out, "input_vec", "INPUT_SIZE", single.inputs().iter().copied());
    write_array(&mut out, "output_vec", "INPUT_SIZE", single.expected().iter().copied());

    let _ = writeln!(out, "\n#define INPUT3_SIZE {}", data.triple.len());
    let triple = &data.triple;
    for (i, name) in ["input_vec3_1", "input_vec3_2", "input_vec3_3"].into_iter().enumerate() {
        write_array(&mut out, name, "INPUT3_SIZE", triple.inputs().iter().map(|t| t[i]));
    }
    write_array(&mut out, "output_vec3", "INPUT3_SIZE", triple.expected().iter().copied());
    out
}
