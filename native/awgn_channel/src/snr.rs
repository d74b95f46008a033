//! Noise level conversions
//!
//! Assumes unit average symbol energy (Es = 1), which holds for every
//! constellation produced by `qam_modem`. With per-dimension variance σ²,
//! N0 = 2σ² and Eb = Es / bits_per_symbol.

/// Convert dB to linear power ratio
#[inline]
pub fn db_to_power(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Convert linear power ratio to dB
#[inline]
pub fn power_to_db(ratio: f64) -> f64 {
    10.0 * ratio.log10()
}

/// Per-dimension noise variance that yields `ebn0_db` at `bits_per_symbol`
pub fn variance_for_ebn0_db(ebn0_db: f64, bits_per_symbol: usize) -> f64 {
    1.0 / (2.0 * bits_per_symbol as f64 * db_to_power(ebn0_db))
}

/// Eb/N0 in dB for a per-dimension noise variance at `bits_per_symbol`
///
/// Zero variance gives `+inf`.
pub fn ebn0_db_for_variance(variance: f64, bits_per_symbol: usize) -> f64 {
    power_to_db(1.0 / (2.0 * bits_per_symbol as f64 * variance))
}

/// Es/N0 in dB for a per-dimension noise variance
pub fn esn0_db_for_variance(variance: f64) -> f64 {
    power_to_db(1.0 / (2.0 * variance))
}
