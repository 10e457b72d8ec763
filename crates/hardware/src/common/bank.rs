//! Configuration bank identifiers.
//!
//! The accelerator exposes up to two independently configurable banks. A single-bank
//! deployment only ever touches `Bank0`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// One of the two hardware configuration slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Bank {
    /// First bank; the only bank in single-bank deployments.
    Bank0,
    /// Second bank.
    Bank1,
}

impl Bank {
    /// Both banks in index order.
    pub const ALL: [Self; 2] = [Self::Bank0, Self::Bank1];

    /// Returns the bank index used in instruction encodings and status lines.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Bank0 => 0,
            Self::Bank1 => 1,
        }
    }

    /// Returns the bank for an encoded index.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidBank` for any index other than 0 or 1.
    pub const fn from_index(index: usize) -> Result<Self, DataError> {
        match index {
            0 => Ok(Self::Bank0),
            1 => Ok(Self::Bank1),
            _ => Err(DataError::InvalidBank(index)),
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Number of banks a deployment configures and exercises.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum BankCount {
    /// Single implicit bank (`Bank0`).
    One,
    /// Both banks, double-buffered.
    #[default]
    Two,
}

impl BankCount {
    /// Banks active for this count, in index order.
    pub fn banks(self) -> &'static [Bank] {
        match self {
            Self::One => &Bank::ALL[..1],
            Self::Two => &Bank::ALL,
        }
    }

    /// Numeric bank count.
    pub const fn get(self) -> usize {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl TryFrom<u8> for BankCount {
    type Error = DataError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            n => Err(DataError::InvalidBankCount(n as usize)),
        }
    }
}

impl From<BankCount> for u8 {
    fn from(count: BankCount) -> Self {
        count.get() as Self
    }
}

impl fmt::Display for BankCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
