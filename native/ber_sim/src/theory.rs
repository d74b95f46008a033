//! Theoretical BER reference curves for square QAM over AWGN
//!
//! The modem labels each axis with the plain binary index of its amplitude
//! level, so adjacent levels can differ in more than one bit. The reference
//! curve follows that labelling; the textbook Gray curve is kept for
//! comparison.

use qam_modem::ModulationOrder;

/// Complementary error function (Abramowitz & Stegun 7.1.26, |ε| < 1.5e-7)
pub fn erfc(x: f64) -> f64 {
    let t = 1.0 / (1.0 + 0.3275911 * x.abs());
    let poly = t * (0.254829592 + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let result = poly * (-x * x).exp();
    if x >= 0.0 { result } else { 2.0 - result }
}

/// Gaussian tail probability Q(z); Q(+inf) = 0
fn q(z: f64) -> f64 {
    0.5 * erfc(z / std::f64::consts::SQRT_2)
}

/// BER of the modem's square M-QAM at linear Eb/N0, unit symbol energy
///
/// Evaluated per axis over every pair of amplitude levels: the probability
/// of landing in the other level's decision region times the number of
/// label bits that differ. I and Q carry the same number of bits and see
/// independent noise, so the per-axis rate is the symbol-level rate.
pub fn square_qam_ber(modulation: ModulationOrder, ebn0_linear: f64) -> f64 {
    if ebn0_linear.is_infinite() {
        return 0.0;
    }

    let m = modulation.order() as f64;
    let bits_per_axis = modulation.bits_per_symbol() / 2;
    let levels = 1usize << bits_per_axis;

    // Levels sit at odd integers scaled by `half_step`; work in those units
    let half_step = (3.0 / (2.0 * (m - 1.0))).sqrt();
    let variance = 1.0 / (2.0 * modulation.bits_per_symbol() as f64 * ebn0_linear);
    let sigma = variance.sqrt() / half_step;

    let position = |i: usize| (2 * i) as f64 - levels as f64 + 1.0;
    // Decision boundary between level j and j + 1
    let boundary = |j: usize| (2 * j + 2) as f64 - levels as f64;

    let mut weighted_errors = 0.0;
    for sent in 0..levels {
        let x = position(sent);
        for decided in (0..levels).filter(|&d| d != sent) {
            let lower = if decided == 0 { f64::NEG_INFINITY } else { boundary(decided - 1) };
            let upper = if decided == levels - 1 { f64::INFINITY } else { boundary(decided) };

            let p = if decided > sent {
                q((lower - x) / sigma) - q((upper - x) / sigma)
            } else {
                q((x - upper) / sigma) - q((x - lower) / sigma)
            };
            weighted_errors += p * (sent ^ decided).count_ones() as f64;
        }
    }

    weighted_errors / (levels * bits_per_axis) as f64
}

/// Approximate BER of Gray-labelled square M-QAM at linear Eb/N0
///
/// Nearest-neighbour approximation; exact for QPSK.
pub fn gray_square_qam_ber(modulation: ModulationOrder, ebn0_linear: f64) -> f64 {
    if ebn0_linear.is_infinite() {
        return 0.0;
    }

    let m = modulation.order() as f64;
    let k = modulation.bits_per_symbol() as f64;

    2.0 / k
        * (1.0 - 1.0 / m.sqrt())
        * erfc((3.0 * k * ebn0_linear / (2.0 * (m - 1.0))).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(x: f64) -> f64 {
        10f64.powf(x / 10.0)
    }

    #[test]
    fn test_erfc_values() {
        assert!((erfc(0.0) - 1.0).abs() < 1e-6);
        assert!((erfc(1.0) - 0.157299207).abs() < 1e-6);
        assert!((erfc(-1.0) - 1.842700793).abs() < 1e-6);
        assert!(erfc(6.0) < 1e-15);
        assert_eq!(erfc(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_qpsk_matches_bpsk_formula() {
        for level in [0.0, 4.0, 8.0] {
            let ebn0 = db(level);
            let expected = 0.5 * erfc(ebn0.sqrt());
            assert!((square_qam_ber(ModulationOrder::Qpsk, ebn0) - expected).abs() < 1e-12);
            assert!((gray_square_qam_ber(ModulationOrder::Qpsk, ebn0) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_qpsk_known_point() {
        // QPSK at 9.6 dB ≈ 1e-5
        let ber = square_qam_ber(ModulationOrder::Qpsk, db(9.6));
        assert!(ber > 5e-6 && ber < 2e-5, "ber {}", ber);
    }

    #[test]
    fn test_binary_labels_cost_more_than_gray() {
        // Adjacent-level bit flips per axis: 16-QAM 1,2,1 and 64-QAM 1,2,1,3,1,2,1
        let ebn0 = db(14.0);
        for (modulation, ratio) in [(ModulationOrder::Qam16, 4.0 / 3.0), (ModulationOrder::Qam64, 11.0 / 7.0)] {
            let binary = square_qam_ber(modulation, ebn0);
            let gray = gray_square_qam_ber(modulation, ebn0);
            assert!((binary / gray - ratio).abs() / ratio < 0.05, "{} ratio {}", modulation, binary / gray);
        }
    }

    #[test]
    fn test_higher_orders_are_worse() {
        let ebn0 = db(10.0);
        let qpsk = square_qam_ber(ModulationOrder::Qpsk, ebn0);
        let qam16 = square_qam_ber(ModulationOrder::Qam16, ebn0);
        let qam64 = square_qam_ber(ModulationOrder::Qam64, ebn0);
        assert!(qpsk < qam16 && qam16 < qam64);
    }

    #[test]
    fn test_low_snr_approaches_half() {
        for modulation in ModulationOrder::ALL {
            let ber = square_qam_ber(modulation, db(-20.0));
            assert!(ber > 0.3 && ber < 0.6, "{} ber {}", modulation, ber);
        }
    }

    #[test]
    fn test_noiseless_is_zero() {
        assert_eq!(square_qam_ber(ModulationOrder::Qam64, f64::INFINITY), 0.0);
        assert_eq!(gray_square_qam_ber(ModulationOrder::Qam64, f64::INFINITY), 0.0);
    }
}
