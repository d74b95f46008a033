//! Complex additive white Gaussian noise source
//!
//! Draws independent zero-mean Gaussian samples for the real and imaginary
//! parts, real first.

use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{ChannelError, ChannelResult};

/// Complex Gaussian sampler with a fixed per-dimension standard deviation
#[derive(Debug, Clone, Copy)]
pub struct ComplexNoise {
    /// Standard deviation (sqrt of per-dimension variance)
    std_dev: f64,

    distr: Normal<f64>,
}

impl ComplexNoise {
    /// Create a sampler for the given per-dimension variance
    pub fn new(variance: f64) -> ChannelResult<Self> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(ChannelError::InvalidVariance(variance));
        }

        let std_dev = variance.sqrt();
        let distr = Normal::new(0.0, std_dev).map_err(|_| ChannelError::InvalidVariance(variance))?;

        Ok(Self { std_dev, distr })
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Draw one real-valued sample
    pub fn sample_real<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.distr.sample(rng)
    }

    /// Draw one complex sample: real part first, then imaginary
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Complex64 {
        let re = self.distr.sample(rng);
        let im = self.distr.sample(rng);
        Complex64::new(re, im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_noise_creation() {
        let noise = ComplexNoise::new(0.1).unwrap();
        assert!((noise.std_dev() - 0.1_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_rejects_bad_variance() {
        assert_eq!(
            ComplexNoise::new(-1.0).unwrap_err(),
            ChannelError::InvalidVariance(-1.0)
        );
        assert!(ComplexNoise::new(f64::NAN).is_err());
        assert!(ComplexNoise::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_noise_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let noise = ComplexNoise::new(1.0).unwrap();

        let n = 10000;
        let samples: Vec<Complex64> = (0..n).map(|_| noise.sample(&mut rng)).collect();

        for (axis, values) in [
            ("re", samples.iter().map(|s| s.re).collect::<Vec<_>>()),
            ("im", samples.iter().map(|s| s.im).collect::<Vec<_>>()),
        ] {
            let mean: f64 = values.iter().sum::<f64>() / n as f64;
            assert!(mean.abs() < 0.1, "{} mean {} should be close to 0", axis, mean);

            let variance: f64 = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
            assert!((variance - 1.0).abs() < 0.1, "{} variance {} should be close to 1", axis, variance);
        }
    }

    #[test]
    fn test_axes_uncorrelated() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let noise = ComplexNoise::new(1.0).unwrap();

        let n = 50000;
        let samples: Vec<Complex64> = (0..n).map(|_| noise.sample(&mut rng)).collect();
        let corr: f64 = samples.iter().map(|s| s.re * s.im).sum::<f64>() / n as f64;

        assert!(corr.abs() < 0.05, "I/Q correlation {} should be close to 0", corr);
    }

    #[test]
    fn test_noise_deterministic() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);
        let noise = ComplexNoise::new(0.5).unwrap();

        for _ in 0..100 {
            assert_eq!(noise.sample(&mut rng1), noise.sample(&mut rng2));
        }
    }

    #[test]
    fn test_noise_is_gaussian() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let noise = ComplexNoise::new(1.0).unwrap();

        let num_samples = 100000usize;
        let samples: Vec<f64> = (0..num_samples).map(|_| noise.sample_real(&mut rng)).collect();

        let mean: f64 = samples.iter().sum::<f64>() / num_samples as f64;
        let std: f64 = (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>()
            / num_samples as f64).sqrt();

        // For Gaussian: ~68% within 1σ, ~95% within 2σ, ~99.7% within 3σ
        let within = |k: f64| {
            samples.iter().filter(|&x| (x - mean).abs() < k * std).count() as f64
                / num_samples as f64
        };

        assert!((within(1.0) - 0.683).abs() < 0.02, "1σ coverage {}", within(1.0));
        assert!((within(2.0) - 0.954).abs() < 0.01, "2σ coverage {}", within(2.0));
        assert!((within(3.0) - 0.997).abs() < 0.01, "3σ coverage {}", within(3.0));
    }

    #[test]
    fn test_noise_power_scaling() {
        for &power in &[0.1, 1.0, 10.0] {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            let noise = ComplexNoise::new(power).unwrap();

            let num_samples = 50000usize;
            let samples: Vec<f64> = (0..num_samples).map(|_| noise.sample_real(&mut rng)).collect();

            let mean: f64 = samples.iter().sum::<f64>() / num_samples as f64;
            let variance: f64 = samples.iter()
                .map(|x| (x - mean).powi(2))
                .sum::<f64>() / num_samples as f64;

            // Variance should approximately equal the configured power
            assert!((variance - power).abs() / power < 0.1,
                "For power={}, measured variance={}", power, variance);
        }
    }

    #[test]
    fn test_noise_numerical_stability() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let noise = ComplexNoise::new(1.0).unwrap();

        let non_finite = (0..200_000)
            .map(|_| noise.sample(&mut rng))
            .filter(|s| !s.re.is_finite() || !s.im.is_finite())
            .count();

        assert_eq!(non_finite, 0, "Found {} non-finite samples", non_finite);
    }
}
