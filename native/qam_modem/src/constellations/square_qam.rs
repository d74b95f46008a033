//! Square M-QAM constellation builder
//!
//! Amplitudes are odd integers on each axis (±1, ±3, ...), permuted through
//! the Gray table and normalized to unit average symbol energy.
//!
//! The Gray permutation is applied to the level table and again to each
//! half-index before lookup. The two cancel, so point `i` lands on
//! `level(i >> k)` in I and `level(i & mask)` in Q. Keep both steps: the
//! index-to-point map must stay identical across implementations for BER
//! curves to be comparable.

use num_complex::Complex64;

use super::gray::{binary_to_gray, gray_ordered_levels};
use crate::error::{ModemError, ModemResult};
use crate::order::ModulationOrder;
use crate::traits::Constellation;

/// Normalization factors below this leave the points unscaled
pub const MIN_NORMALIZATION: f64 = 1e-9;

/// Widest constellation the builder accepts (65536 points)
pub const MAX_BITS_PER_SYMBOL: usize = 16;

/// Build the power-normalized square constellation for `bits_per_symbol`
///
/// # Errors
/// `InvalidBitsPerSymbol` unless `bits_per_symbol` is even and in
/// `2..=MAX_BITS_PER_SYMBOL`.
pub fn build_constellation(bits_per_symbol: usize) -> ModemResult<Vec<Complex64>> {
    if bits_per_symbol < 2 || bits_per_symbol % 2 != 0 || bits_per_symbol > MAX_BITS_PER_SYMBOL {
        return Err(ModemError::InvalidBitsPerSymbol(bits_per_symbol));
    }

    let order = 1usize << bits_per_symbol;
    let bits_per_axis = bits_per_symbol / 2;
    let axis_mask = (1usize << bits_per_axis) - 1;
    let levels = gray_ordered_levels(bits_per_axis);

    let mut points = Vec::with_capacity(order);
    let mut total_power = 0.0;

    for index in 0..order {
        let bits_i = index >> bits_per_axis;
        let bits_q = index & axis_mask;

        let point = Complex64::new(
            levels[binary_to_gray(bits_i)],
            levels[binary_to_gray(bits_q)],
        );
        total_power += point.norm_sqr();
        points.push(point);
    }

    let avg_power = total_power / order as f64;
    let norm = avg_power.sqrt();

    if norm >= MIN_NORMALIZATION {
        for point in &mut points {
            *point /= norm;
        }
    }

    Ok(points)
}

/// Square QAM constellation for one of the supported orders
///
/// Built once and immutable afterwards; safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareQam {
    modulation: ModulationOrder,
    points: Vec<Complex64>,
}

impl SquareQam {
    pub fn new(modulation: ModulationOrder) -> ModemResult<Self> {
        let points = build_constellation(modulation.bits_per_symbol())?;
        Ok(Self { modulation, points })
    }

    pub fn modulation(&self) -> ModulationOrder {
        self.modulation
    }
}

impl Constellation for SquareQam {
    fn order(&self) -> usize {
        self.points.len()
    }

    fn bits_per_symbol(&self) -> usize {
        self.modulation.bits_per_symbol()
    }

    fn points(&self) -> &[Complex64] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellations::amplitude_level;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn qam(modulation: ModulationOrder) -> SquareQam {
        SquareQam::new(modulation).expect("supported order")
    }

    #[test]
    fn test_average_power_is_unity() {
        for modulation in ModulationOrder::ALL {
            let constellation = qam(modulation);
            let total: f64 = constellation.points().iter().map(|p| p.norm_sqr()).sum();
            let avg = total / constellation.order() as f64;
            assert!((avg - 1.0).abs() < 1e-9, "{}: average power {}", modulation, avg);
        }
    }

    #[test]
    fn test_order_and_bits() {
        for modulation in ModulationOrder::ALL {
            let constellation = qam(modulation);
            assert_eq!(constellation.order(), modulation.order());
            assert_eq!(constellation.bits_per_symbol(), modulation.bits_per_symbol());
        }
    }

    #[test]
    fn test_qpsk_points() {
        let qpsk = qam(ModulationOrder::Qpsk);
        let expected = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];
        for (sym, &(i, q)) in expected.iter().enumerate() {
            let p = qpsk.point(sym).unwrap();
            assert!((p.re - i * FRAC_1_SQRT_2).abs() < 1e-12, "sym {} I: {}", sym, p.re);
            assert!((p.im - q * FRAC_1_SQRT_2).abs() < 1e-12, "sym {} Q: {}", sym, p.im);
        }
    }

    #[test]
    fn test_qam64_scaling() {
        // Levels ±1..±7 scaled by 1/√42 for unit average power
        const NORM: f64 = 0.154303349962092;
        let qam64 = qam(ModulationOrder::Qam64);

        let corner = qam64.point(0).unwrap();
        assert!((corner.re + 7.0 * NORM).abs() < 1e-12);
        assert!((corner.im + 7.0 * NORM).abs() < 1e-12);

        let last = qam64.point(63).unwrap();
        assert!((last.re - 7.0 * NORM).abs() < 1e-12);
        assert!((last.im - 7.0 * NORM).abs() < 1e-12);
    }

    #[test]
    fn test_point_placement_per_axis() {
        for modulation in ModulationOrder::ALL {
            let constellation = qam(modulation);
            let k = modulation.bits_per_symbol() / 2;
            let levels = 1usize << k;
            let norm = constellation.point(0).unwrap().re / amplitude_level(0, levels);

            for (index, p) in constellation.points().iter().enumerate() {
                let i_level = amplitude_level(index >> k, levels);
                let q_level = amplitude_level(index & (levels - 1), levels);
                assert!((p.re - i_level * norm).abs() < 1e-12, "{} idx {}", modulation, index);
                assert!((p.im - q_level * norm).abs() < 1e-12, "{} idx {}", modulation, index);
            }
        }
    }

    #[test]
    fn test_single_bit_flip_adjacency() {
        for modulation in ModulationOrder::ALL {
            let constellation = qam(modulation);
            let bps = modulation.bits_per_symbol();
            let step = {
                let levels = 1usize << (bps / 2);
                let p0 = constellation.point(0).unwrap().re;
                2.0 * p0 / amplitude_level(0, levels)
            };

            for index in 0..constellation.order() {
                for bit in 0..bps {
                    let neighbour = index ^ (1 << bit);
                    let a = constellation.point(index).unwrap();
                    let b = constellation.point(neighbour).unwrap();
                    let d_re = (a.re - b.re).abs();
                    let d_im = (a.im - b.im).abs();

                    // Flipping an I-half bit moves I only, and vice versa
                    let (moved, fixed) = if bit >= bps / 2 { (d_re, d_im) } else { (d_im, d_re) };
                    assert!(fixed < 1e-12, "{} {}↔{} moved both axes", modulation, index, neighbour);
                    let steps = moved / step;
                    assert!(steps >= 1.0 - 1e-9, "{} {}↔{} did not move", modulation, index, neighbour);
                    assert!((steps - steps.round()).abs() < 1e-9, "{} {}↔{} off grid", modulation, index, neighbour);

                    // The least significant bit of each half always lands on an adjacent level
                    if bit == 0 {
                        assert!((d_im - step).abs() < 1e-9, "{} {}↔{}", modulation, index, neighbour);
                    }
                    if bit == bps / 2 {
                        assert!((d_re - step).abs() < 1e-9, "{} {}↔{}", modulation, index, neighbour);
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic_build() {
        for modulation in ModulationOrder::ALL {
            assert_eq!(qam(modulation), qam(modulation));
        }
    }

    #[test]
    fn test_invalid_bits_per_symbol() {
        for bps in [0, 1, 3, 5, 18] {
            assert_eq!(
                build_constellation(bps),
                Err(ModemError::InvalidBitsPerSymbol(bps)),
                "bps {}",
                bps
            );
        }
    }

    #[test]
    fn test_wider_square_orders_normalize() {
        let points = build_constellation(8).unwrap();
        assert_eq!(points.len(), 256);
        let avg: f64 = points.iter().map(|p| p.norm_sqr()).sum::<f64>() / 256.0;
        assert!((avg - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_roundtrip() {
        for modulation in ModulationOrder::ALL {
            let constellation = qam(modulation);
            for sym in 0..constellation.order() {
                let p = constellation.point(sym).unwrap();
                assert_eq!(constellation.nearest(p), Some(sym), "{} sym {}", modulation, sym);
            }
        }
    }

    #[test]
    fn test_nearest_noise_tolerance() {
        // Half the 64-QAM level spacing is 1/√42 ≈ 0.154
        for modulation in ModulationOrder::ALL {
            let constellation = qam(modulation);
            for sym in 0..constellation.order() {
                let p = constellation.point(sym).unwrap();
                let noisy = p + Complex64::new(0.05, -0.03);
                assert_eq!(constellation.nearest(noisy), Some(sym), "{} sym {}", modulation, sym);
            }
        }
    }

    #[test]
    fn test_nearest_ties_go_to_lowest_index() {
        let qpsk = qam(ModulationOrder::Qpsk);
        // Origin is equidistant from all four points
        assert_eq!(qpsk.nearest(Complex64::new(0.0, 0.0)), Some(0));
        // On the Q axis above the origin: equidistant from 1 and 3
        assert_eq!(qpsk.nearest(Complex64::new(0.0, FRAC_1_SQRT_2)), Some(1));
        // On the I axis right of the origin: equidistant from 2 and 3
        assert_eq!(qpsk.nearest(Complex64::new(FRAC_1_SQRT_2, 0.0)), Some(2));
    }
}
