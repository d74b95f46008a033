//! Bit-to-symbol modulator
//!
//! Packs each group of `bits_per_symbol` bits big-endian (first bit is the
//! MSB) into a symbol index and maps it through the constellation.

use num_complex::Complex64;

use crate::constellations::SquareQam;
use crate::error::{ModemError, ModemResult};
use crate::order::ModulationOrder;
use crate::traits::Constellation;

/// QAM modulator over a fixed square constellation
#[derive(Debug, Clone)]
pub struct QamModulator {
    constellation: SquareQam,
}

impl QamModulator {
    /// Create a modulator, building the constellation once
    pub fn new(modulation: ModulationOrder) -> ModemResult<Self> {
        Ok(Self {
            constellation: SquareQam::new(modulation)?,
        })
    }

    /// Modulate a bit vector to complex symbols
    ///
    /// # Arguments
    /// * `bits` - 0/1 values, length a non-zero multiple of `bits_per_symbol`
    ///
    /// # Returns
    /// One symbol per group of `bits_per_symbol` bits, in input order
    ///
    /// # Errors
    /// `InvalidBitCount` for a bad length, `InvalidBit` naming the first
    /// position holding anything other than 0 or 1.
    pub fn modulate(&self, bits: &[u8]) -> ModemResult<Vec<Complex64>> {
        let bps = self.bits_per_symbol();
        if bits.is_empty() || bits.len() % bps != 0 {
            return Err(ModemError::InvalidBitCount {
                len: bits.len(),
                bits_per_symbol: bps,
            });
        }

        let mut symbols = Vec::with_capacity(bits.len() / bps);

        for (group_idx, group) in bits.chunks_exact(bps).enumerate() {
            let mut index = 0usize;
            for (j, &bit) in group.iter().enumerate() {
                if bit > 1 {
                    return Err(ModemError::InvalidBit {
                        index: group_idx * bps + j,
                        value: bit,
                    });
                }
                index = (index << 1) | bit as usize;
            }

            let point = self.constellation.point(index).ok_or(ModemError::IndexOutOfRange {
                index,
                order: self.constellation.order(),
            })?;
            symbols.push(point);
        }

        Ok(symbols)
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
