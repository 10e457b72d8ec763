//! Test case identifiers and the inputs that produced a result.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::constants::HEX_FIELD_WIDTH;

/// The two test cases of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseId {
    /// Single-input evaluation (`lute`).
    A,
    /// Triple-input evaluation (`lute3`).
    B,
}

impl CaseId {
    /// Letter used in the diagnostic protocol.
    pub const fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Operands of one evaluation request, kept for mismatch diagnosis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaseInput {
    /// Case A operand.
    Single(u64),
    /// Case B operands, in issue order.
    Triple([u64; 3]),
}

impl CaseInput {
    /// Operands as a slice.
    pub fn operands(&self) -> &[u64] {
        match self {
            Self::Single(x) => std::slice::from_ref(x),
            Self::Triple(xs) => xs,
        }
    }
}

impl fmt::Display for CaseInput {
    /// Lowercase 16-digit hexadecimal fields separated by one space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.operands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x:0w$x}", w = HEX_FIELD_WIDTH)?;
        }
        Ok(())
    }
}
