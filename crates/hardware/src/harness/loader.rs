//! Bank configuration.
//!
//! Loading a bank is a reset followed by every bitstream word in order. With two
//! banks, words may be interleaved across banks; only the order within a bank is
//! significant.

use tracing::debug;

use crate::accel::Accelerator;
use crate::common::{AccelError, Bank, HarnessError};
use crate::config::LoadOrder;
use crate::data::{Bitstream, BitstreamStore};

/// Issues resets and configuration words.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigLoader {
    order: LoadOrder,
}

impl ConfigLoader {
    /// Loader using `order` across banks.
    pub const fn new(order: LoadOrder) -> Self {
        Self { order }
    }

    /// Cross-bank order.
    pub const fn order(&self) -> LoadOrder {
        self.order
    }

    /// Resets `bank` once, then loads every word of `bitstream` in order.
    ///
    /// # Errors
    ///
    /// Propagates accelerator errors.
    pub fn load<A: Accelerator + ?Sized>(
        accel: &mut A,
        bank: Bank,
        bitstream: &Bitstream,
    ) -> Result<(), AccelError> {
        accel.reset(bank)?;
        Self::load_words(accel, bank, bitstream)
    }

    /// Resets every bank in `banks`.
    ///
    /// # Errors
    ///
    /// Propagates accelerator errors.
    pub fn reset_all<A: Accelerator + ?Sized>(
        accel: &mut A,
        banks: &[Bank],
    ) -> Result<(), AccelError> {
        banks.iter().try_for_each(|&bank| accel.reset(bank))
    }

    /// Loads every bank in `banks` from `store`. Banks must already be reset.
    ///
    /// # Errors
    ///
    /// Returns `HarnessError::MissingBitstream` if a bank has no bitstream, or
    /// propagates accelerator errors.
    pub fn load_configured<A: Accelerator + ?Sized>(
        &self,
        accel: &mut A,
        store: &BitstreamStore,
        banks: &[Bank],
    ) -> Result<(), HarnessError> {
        let bitstreams = banks
            .iter()
            .map(|&bank| {
                store
                    .get(bank)
                    .map(|b| (bank, b))
                    .ok_or(HarnessError::MissingBitstream(bank))
            })
            .collect::<Result<Vec<_>, _>>()?;

        match self.order {
            LoadOrder::Sequential => {
                for &(bank, bitstream) in &bitstreams {
                    Self::load_words(accel, bank, bitstream)?;
                }
            }
            LoadOrder::Interleaved => {
                let longest = bitstreams.iter().map(|(_, b)| b.len()).max().unwrap_or(0);
                for i in 0..longest {
                    for &(bank, bitstream) in &bitstreams {
                        if let Some(&word) = bitstream.words().get(i) {
                            accel.load(bank, word)?;
                        }
                    }
                }
            }
        }
        for (bank, bitstream) in &bitstreams {
            debug!(%bank, words = bitstream.len(), order = ?self.order, "bank configured");
        }
        Ok(())
    }

    /// Resets then loads every bank in `banks`.
    ///
    /// # Errors
    ///
    /// As `load_configured`.
    pub fn load_all<A: Accelerator + ?Sized>(
        &self,
        accel: &mut A,
        store: &BitstreamStore,
        banks: &[Bank],
    ) -> Result<(), HarnessError> {
        Self::reset_all(accel, banks)?;
        self.load_configured(accel, store, banks)
    }

    fn load_words<A: Accelerator + ?Sized>(
        accel: &mut A,
        bank: Bank,
        bitstream: &Bitstream,
    ) -> Result<(), AccelError> {
        bitstream
            .words()
            .iter()
            .try_for_each(|&word| accel.load(bank, word))
    }
}
