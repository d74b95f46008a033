//! Symbol-to-bit demodulator
//!
//! Symmetric with the modulator: nearest-point hard decision over the same
//! constellation, then big-endian unpacking of the winning index.

use num_complex::Complex64;

use crate::constellations::SquareQam;
use crate::error::{ModemError, ModemResult};
use crate::order::ModulationOrder;
use crate::traits::Constellation;

/// QAM demodulator over a fixed square constellation
#[derive(Debug, Clone)]
pub struct QamDemodulator {
    constellation: SquareQam,
}

impl QamDemodulator {
    /// Create a demodulator, building the constellation once
    pub fn new(modulation: ModulationOrder) -> ModemResult<Self> {
        Ok(Self {
            constellation: SquareQam::new(modulation)?,
        })
    }

    /// Hard decision for one received symbol
    ///
    /// Lowest index wins exact ties.
    pub fn detect(&self, received: Complex64) -> ModemResult<usize> {
        self.constellation
            .nearest(received)
            .ok_or(ModemError::EmptyConstellation)
    }

    /// Demodulate symbols to bits (hard decisions)
    ///
    /// # Returns
    /// `symbols.len() * bits_per_symbol` bits, in input order
    pub fn demodulate(&self, symbols: &[Complex64]) -> ModemResult<Vec<u8>> {
        let bps = self.bits_per_symbol();
        let mut bits = Vec::with_capacity(symbols.len() * bps);

        for &received in symbols {
            let index = self.detect(received)?;
            self.push_index_bits(index, &mut bits)?;
        }

        Ok(bits)
    }

    /// Append the bits of `index`, MSB first
    fn push_index_bits(&self, index: usize, out: &mut Vec<u8>) -> ModemResult<()> {
        let order = self.constellation.order();
        if index >= order {
            return Err(ModemError::IndexOutOfRange { index, order });
        }

        let bps = self.bits_per_symbol();
        out.extend((0..bps).map(|j| ((index >> (bps - 1 - j)) & 1) as u8));
        Ok(())
    }

    /// Bits for a single symbol index
    pub fn index_to_bits(&self, index: usize) -> ModemResult<Vec<u8>> {
        let mut bits = Vec::with_capacity(self.bits_per_symbol());
        self.push_index_bits(index, &mut bits)?;
        Ok(bits)
    }

    pub fn modulation(&self) -> ModulationOrder {
        self.constellation.modulation()
    }

    pub fn bits_per_symbol(&self) -> usize {
        self.constellation.bits_per_symbol()
    }

    /// Get reference to constellation
    pub fn constellation(&self) -> &SquareQam {
        &self.constellation
    }
}
