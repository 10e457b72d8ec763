//! Test vectors and golden outputs.
//!
//! Vectors are parallel arrays paired by position. Lengths are checked when a set is
//! built or deserialized, so the executor can index them without further checks.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{CaseId, DataError};
use crate::data::bitstream::BitstreamStore;

fn check_len(
    case: CaseId,
    what: &'static str,
    len: usize,
    expected: usize,
) -> Result<(), DataError> {
    if len == expected {
        Ok(())
    } else {
        Err(DataError::LengthMismatch {
            case,
            what,
            len,
            expected,
        })
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
struct RawSingle {
    #[serde(default)]
    inputs: Vec<u64>,
    #[serde(default)]
    expected: Vec<u64>,
}

/// Case A inputs and golden outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSingle", into = "RawSingle")]
pub struct SingleInputVectors {
    inputs: Vec<u64>,
    expected: Vec<u64>,
}

impl SingleInputVectors {
    /// Pairs `inputs[i]` with `expected[i]`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::LengthMismatch` if the lengths differ.
    pub fn new(inputs: Vec<u64>, expected: Vec<u64>) -> Result<Self, DataError> {
        check_len(CaseId::A, "expected", expected.len(), inputs.len())?;
        Ok(Self { inputs, expected })
    }

    /// Number of vectors.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Inputs in order.
    pub fn inputs(&self) -> &[u64] {
        &self.inputs
    }

    /// Golden outputs in order.
    pub fn expected(&self) -> &[u64] {
        &self.expected
    }

    /// `(input, expected)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.inputs.iter().copied().zip(self.expected.iter().copied())
    }
}

impl TryFrom<RawSingle> for SingleInputVectors {
    type Error = DataError;

    fn try_from(raw: RawSingle) -> Result<Self, Self::Error> {
        Self::new(raw.inputs, raw.expected)
    }
}

impl From<SingleInputVectors> for RawSingle {
    fn from(v: SingleInputVectors) -> Self {
        Self {
            inputs: v.inputs,
            expected: v.expected,
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
struct RawTriple {
    #[serde(default)]
    input1: Vec<u64>,
    #[serde(default)]
    input2: Vec<u64>,
    #[serde(default)]
    input3: Vec<u64>,
    #[serde(default)]
    expected: Vec<u64>,
}

/// Case B input triples and golden outputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTriple", into = "RawTriple")]
pub struct TripleInputVectors {
    inputs: Vec<[u64; 3]>,
    expected: Vec<u64>,
}

impl TripleInputVectors {
    /// Builds the set from three parallel operand arrays and their golden outputs.
    ///
    /// # Errors
    ///
    /// Returns `DataError::LengthMismatch` naming the first array whose length
    /// differs from `input1`.
    pub fn new(
        input1: Vec<u64>,
        input2: Vec<u64>,
        input3: Vec<u64>,
        expected: Vec<u64>,
    ) -> Result<Self, DataError> {
        let n = input1.len();
        check_len(CaseId::B, "input2", input2.len(), n)?;
        check_len(CaseId::B, "input3", input3.len(), n)?;
        check_len(CaseId::B, "expected", expected.len(), n)?;
        let inputs = input1
            .into_iter()
            .zip(input2)
            .zip(input3)
            .map(|((a, b), c)| [a, b, c])
            .collect();
        Ok(Self { inputs, expected })
    }

    /// Builds the set from operand triples.
    ///
    /// # Errors
    ///
    /// Returns `DataError::LengthMismatch` if the lengths differ.
    pub fn from_triples(inputs: Vec<[u64; 3]>, expected: Vec<u64>) -> Result<Self, DataError> {
        check_len(CaseId::B, "expected", expected.len(), inputs.len())?;
        Ok(Self { inputs, expected })
    }

    /// Number of vectors.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Operand triples in order.
    pub fn inputs(&self) -> &[[u64; 3]] {
        &self.inputs
    }

    /// Golden outputs in order.
    pub fn expected(&self) -> &[u64] {
        &self.expected
    }

    /// `(operands, expected)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = ([u64; 3], u64)> + '_ {
        self.inputs.iter().copied().zip(self.expected.iter().copied())
    }
}

impl TryFrom<RawTriple> for TripleInputVectors {
    type Error = DataError;

    fn try_from(raw: RawTriple) -> Result<Self, Self::Error> {
        Self::new(raw.input1, raw.input2, raw.input3, raw.expected)
    }
}

impl From<TripleInputVectors> for RawTriple {
    fn from(v: TripleInputVectors) -> Self {
        let mut raw = Self {
            expected: v.expected,
            ..Self::default()
        };
        for [a, b, c] in v.inputs {
            raw.input1.push(a);
            raw.input2.push(b);
            raw.input3.push(c);
        }
        raw
    }
}

/// Everything a run consumes: bitstreams, vectors and golden outputs.
///
/// # Examples
///
/// ```
/// use lutsim_core::data::TestData;
///
/// let json = r#"{
///     "bitstreams": { "bank0": [1, 2, 3, 4] },
///     "single": { "inputs": [1], "expected": [170] }
/// }"#;
///
/// let data = TestData::from_json_str(json).unwrap();
/// assert_eq!(data.single.len(), 1);
/// assert!(data.triple.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestData {
    /// Per-bank bitstreams.
    pub bitstreams: BitstreamStore,
    /// Case A vectors.
    #[serde(default)]
    pub single: SingleInputVectors,
    /// Case B vectors.
    #[serde(default)]
    pub triple: TripleInputVectors,
}

impl TestData {
    /// Parses test data from JSON.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Json` for malformed JSON or inconsistent vector lengths.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON test data file.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Io` if the file cannot be read, otherwise as `from_json_str`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `DataError::Json` if serialization fails.
    pub fn to_json(&self) -> Result<String, DataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
