//! Per-bank protocol state.
//!
//! ```text
//! Unknown --reset--> Unconfigured --load--> Loading --last load--> Loaded --evaluate--> Evaluated
//!    ^                    ^                                                                 |
//!    +---- (power-on)     +---------------------------- reset ------------------------------+
//! ```

use std::fmt;

/// Configuration state of one bank as seen by the harness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BankState {
    /// Not reset in this run.
    #[default]
    Unknown,
    /// Reset, no words loaded.
    Unconfigured,
    /// Some but not all words loaded.
    Loading {
        /// Words loaded since reset.
        loaded: usize,
    },
    /// Every word loaded; ready to evaluate.
    Loaded,
    /// At least one evaluate issued since the last load completed.
    Evaluated {
        /// Evaluations issued.
        count: usize,
    },
}

impl BankState {
    /// Words applied since reset, given the bank's bitstream length.
    pub const fn loaded_words(self, expected: usize) -> usize {
        match self {
            Self::Unknown | Self::Unconfigured => 0,
            Self::Loading { loaded } => loaded,
            Self::Loaded | Self::Evaluated { .. } => expected,
        }
    }

    /// True if evaluation is permitted.
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Loaded | Self::Evaluated { .. })
    }
}

impl fmt::Display for BankState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Unconfigured => write!(f, "unconfigured"),
            Self::Loading { loaded } => write!(f, "loading ({loaded})"),
            Self::Loaded => write!(f, "loaded"),
            Self::Evaluated { count } => write!(f, "evaluated ({count})"),
        }
    }
}
