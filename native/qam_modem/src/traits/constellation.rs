//! Constellation trait - Symbol index ↔ complex point mapping
//!
//! Defines how symbol indices map to complex baseband points.
//! This trait knows nothing about noise, framing, or coding.

use num_complex::Complex64;

/// Symbol alphabet mapping trait
///
/// Implementations define the geometry of the constellation diagram.
/// Used by both modulator (index → point) and demodulator (point → index).
pub trait Constellation: Send + Sync {
    /// Number of points in the constellation (4 for QPSK, 16 for 16-QAM, etc.)
    fn order(&self) -> usize;

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        self.order().trailing_zeros() as usize
    }

    /// All points, indexed by symbol number
    fn points(&self) -> &[Complex64];

    /// Map a symbol index to its point, `None` if out of range
    fn point(&self, index: usize) -> Option<Complex64> {
        self.points().get(index).copied()
    }

    /// Decide the nearest symbol index (hard decision)
    ///
    /// Exhaustive squared-distance search in index order. A later point only
    /// wins on a strictly smaller distance, so ties go to the lowest index.
    /// Returns `None` for an empty constellation.
    fn nearest(&self, received: Complex64) -> Option<usize> {
        let mut points = self.points().iter().enumerate();
        let (_, first) = points.next()?;

        let mut best_index = 0;
        let mut best_dist = (received - first).norm_sqr();

        for (index, point) in points {
            let dist = (received - point).norm_sqr();
            if dist < best_dist {
                best_dist = dist;
                best_index = index;
            }
        }

        Some(best_index)
    }
}
