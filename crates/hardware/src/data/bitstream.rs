//! Bank bitstreams.
//!
//! A bitstream is the ordered, non-empty sequence of configuration words for one
//! bank. The store holds at most one per bank and is immutable once built.

use serde::{Deserialize, Serialize};

use crate::common::{Bank, ConfigWord, DataError};

/// Configuration words of one bank, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitstream {
    words: Vec<ConfigWord>,
}

impl Bitstream {
    /// Wraps `words` as the bitstream of `bank`.
    ///
    /// # Errors
    ///
    /// Returns `DataError::EmptyBitstream` if `words` is empty.
    pub fn new(bank: Bank, words: Vec<ConfigWord>) -> Result<Self, DataError> {
        if words.is_empty() {
            return Err(DataError::EmptyBitstream(bank));
        }
        Ok(Self { words })
    }

    /// Words in load order.
    pub fn words(&self) -> &[ConfigWord] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed bitstream.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
struct RawStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank0: Option<Vec<ConfigWord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank1: Option<Vec<ConfigWord>>,
}

/// Bitstreams for both banks.
///
/// Serialized as `{ "bank0": [..], "bank1": [..] }`; either key may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStore", into = "RawStore")]
pub struct BitstreamStore {
    banks: [Option<Bitstream>; 2],
}

impl BitstreamStore {
    /// Builds a store from optional per-bank word lists.
    ///
    /// # Errors
    ///
    /// Returns `DataError::EmptyBitstream` if a supplied list is empty.
    pub fn new(
        bank0: Option<Vec<ConfigWord>>,
        bank1: Option<Vec<ConfigWord>>,
    ) -> Result<Self, DataError> {
        let wrap = |bank, words: Option<Vec<ConfigWord>>| {
            words.map(|w| Bitstream::new(bank, w)).transpose()
        };
        Ok(Self {
            banks: [wrap(Bank::Bank0, bank0)?, wrap(Bank::Bank1, bank1)?],
        })
    }

    /// Bitstream of `bank`, if any.
    pub fn get(&self, bank: Bank) -> Option<&Bitstream> {
        self.banks[bank.index()].as_ref()
    }

    /// Banks that carry a bitstream, in bank order.
    pub fn banks(&self) -> impl Iterator<Item = (Bank, &Bitstream)> + '_ {
        Bank::ALL
            .into_iter()
            .filter_map(|bank| self.get(bank).map(|b| (bank, b)))
    }

    /// Checks every present bitstream against the accelerator register count.
    ///
    /// # Errors
    ///
    /// Returns `DataError::BitstreamLength` for the first bank that differs.
    pub fn validate_lengths(&self, expected: usize) -> Result<(), DataError> {
        for (bank, bitstream) in self.banks() {
            if bitstream.len() != expected {
                return Err(DataError::BitstreamLength {
                    bank,
                    len: bitstream.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<RawStore> for BitstreamStore {
    type Error = DataError;

    fn try_from(raw: RawStore) -> Result<Self, Self::Error> {
        Self::new(raw.bank0, raw.bank1)
    }
}

impl From<BitstreamStore> for RawStore {
    fn from(store: BitstreamStore) -> Self {
        let [bank0, bank1] = store.banks.map(|b| b.map(|b| b.words));
        Self { bank0, bank1 }
    }
}
