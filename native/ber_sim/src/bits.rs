//! Random bit source and bit-error counting

use rand::Rng;

use crate::error::{SimError, SimResult};

/// Generate `n` uniformly distributed 0/1 bits
pub fn random_bits<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<u8> {
    (0..n).map(|_| rng.gen_range(0..=1u8)).collect()
}

/// Count positions where `original` and `recovered` differ
///
/// # Errors
/// `LengthMismatch` if the vectors differ in length.
pub fn count_bit_errors(original: &[u8], recovered: &[u8]) -> SimResult<usize> {
    if original.len() != recovered.len() {
        return Err(SimError::LengthMismatch {
            expected: original.len(),
            actual: recovered.len(),
        });
    }

    Ok(original
        .iter()
        .zip(recovered)
        .filter(|(a, b)| a != b)
        .count())
}

/// Errors over total bits, 0 for an empty run
pub fn bit_error_rate(errors: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        errors as f64 / total as f64
    }
}
