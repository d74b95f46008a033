//! AWGN channel
//!
//! Adds independent Gaussian noise to the real and imaginary part of each
//! symbol. The channel owns its PRNG; callers pick the generator and seed
//! at construction.
//!
//! Variances below `MIN_NOISE_VARIANCE` are treated as a noiseless channel:
//! the symbols are copied and the PRNG is not advanced.

use num_complex::Complex64;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{ChannelError, ChannelResult};
use crate::noise::ComplexNoise;

/// Variances below this leave the symbols untouched
pub const MIN_NOISE_VARIANCE: f64 = 1e-12;

/// Additive white Gaussian noise channel
///
/// Not shareable across threads without external locking: every noisy call
/// advances the owned PRNG through `&mut self`.
#[derive(Debug, Clone)]
pub struct AwgnChannel<R = ChaCha8Rng> {
    rng: R,
}

impl AwgnChannel<ChaCha8Rng> {
    /// Channel seeded from system entropy; not reproducible run-to-run
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }

    /// Channel with a reproducible noise sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> AwgnChannel<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Return a noisy copy of `symbols`
    ///
    /// # Arguments
    /// * `symbols` - Clean complex symbols
    /// * `variance` - Noise variance per real dimension (N0/2)
    ///
    /// # Errors
    /// `InvalidVariance` if `variance` is negative, NaN or infinite.
    pub fn add_noise(&mut self, symbols: &[Complex64], variance: f64) -> ChannelResult<Vec<Complex64>> {
        let mut noisy = symbols.to_vec();
        self.add_noise_in_place(&mut noisy, variance)?;
        Ok(noisy)
    }

    /// Add noise to `symbols` in place, same semantics as [`add_noise`](Self::add_noise)
    pub fn add_noise_in_place(&mut self, symbols: &mut [Complex64], variance: f64) -> ChannelResult<()> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(ChannelError::InvalidVariance(variance));
        }

        if variance < MIN_NOISE_VARIANCE {
            return Ok(());
        }

        let noise = ComplexNoise::new(variance)?;
        for symbol in symbols.iter_mut() {
            *symbol += noise.sample(&mut self.rng);
        }

        Ok(())
    }

    /// Access the underlying PRNG
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}
