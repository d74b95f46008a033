//! BER sweep engine
//!
//! For each modulation the modulator and demodulator are built once; each
//! sweep point then draws fresh bits, pushes them through
//! modulate → add noise → demodulate and counts mismatches.

use awgn_channel::{snr, AwgnChannel};
use qam_modem::{ModulationOrder, QamDemodulator, QamModulator};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, info_span, warn};

use crate::bits::{bit_error_rate, count_bit_errors, random_bits};
use crate::config::{NoisePoint, SimConfig};
use crate::error::SimResult;
use crate::report::BerRecord;
use crate::theory::square_qam_ber;

/// Run a single transmission of `bits` at `variance` and return the bit errors
pub fn transmit<R: Rng>(
    modulator: &QamModulator,
    demodulator: &QamDemodulator,
    channel: &mut AwgnChannel<R>,
    bits: &[u8],
    variance: f64,
) -> SimResult<usize> {
    let symbols = modulator.modulate(bits)?;
    let noisy = channel.add_noise(&symbols, variance)?;
    let recovered = demodulator.demodulate(&noisy)?;
    count_bit_errors(bits, &recovered)
}

/// Sweep driver owning the bit source and the channel
pub struct Simulation<B = ChaCha8Rng, C = ChaCha8Rng> {
    config: SimConfig,
    bit_rng: B,
    channel: AwgnChannel<C>,
}

impl Simulation<ChaCha8Rng, ChaCha8Rng> {
    /// Build from config: with a seed, a master generator derives the bit
    /// and channel seeds; otherwise both seed from system entropy.
    pub fn from_config(config: SimConfig) -> Self {
        let (bit_rng, channel) = match config.seed {
            Some(seed) => {
                let mut master = ChaCha8Rng::seed_from_u64(seed);
                let bit_seed: u64 = master.gen();
                let channel_seed: u64 = master.gen();
                (
                    ChaCha8Rng::seed_from_u64(bit_seed),
                    AwgnChannel::seeded(channel_seed),
                )
            }
            None => (ChaCha8Rng::from_entropy(), AwgnChannel::from_entropy()),
        };
        Self::new(config, bit_rng, channel)
    }
}

impl<B: Rng, C: Rng> Simulation<B, C> {
    pub fn new(config: SimConfig, bit_rng: B, channel: AwgnChannel<C>) -> Self {
        Self {
            config,
            bit_rng,
            channel,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Run the full sweep, handing each record to `on_record` as it completes
    ///
    /// Modulations whose bits-per-symbol does not divide the bit count are
    /// skipped with a warning. Any other error aborts the sweep.
    pub fn run<F>(&mut self, mut on_record: F) -> SimResult<Vec<BerRecord>>
    where
        F: FnMut(&BerRecord) -> SimResult<()>,
    {
        self.config.validate()?;

        let modulations = self.config.modulations.clone();
        let mut records = Vec::with_capacity(modulations.len() * self.config.sweep.len());

        for modulation in modulations {
            let _span = info_span!("modulation", %modulation).entered();

            let bps = modulation.bits_per_symbol();
            if self.config.num_bits % bps != 0 {
                warn!(
                    "num_bits ({}) not a non-zero multiple of bits per symbol ({}) for {}. Skipping.",
                    self.config.num_bits, bps, modulation
                );
                continue;
            }

            let modulator = QamModulator::new(modulation)?;
            let demodulator = QamDemodulator::new(modulation)?;
            info!(points = self.config.sweep.len(), bits = self.config.num_bits, "starting sweep");

            for point in self.config.sweep.points(bps) {
                let record = self.run_point(modulation, &modulator, &demodulator, point)?;
                on_record(&record)?;
                records.push(record);
            }
        }

        Ok(records)
    }

    fn run_point(
        &mut self,
        modulation: ModulationOrder,
        modulator: &QamModulator,
        demodulator: &QamDemodulator,
        point: NoisePoint,
    ) -> SimResult<BerRecord> {
        let num_bits = self.config.num_bits;
        let bits = random_bits(&mut self.bit_rng, num_bits);
        let errors = transmit(modulator, demodulator, &mut self.channel, &bits, point.variance)?;
        let ber = bit_error_rate(errors, num_bits);
        let theoretical_ber = square_qam_ber(modulation, snr::db_to_power(point.ebn0_db));

        debug!(
            variance = point.variance,
            ebn0_db = point.ebn0_db,
            errors,
            ber,
            theoretical_ber,
            "sweep point done"
        );

        Ok(BerRecord {
            modulation,
            noise_variance: point.variance,
            ebn0_db: point.ebn0_db,
            errors,
            bits: num_bits,
            ber,
            theoretical_ber,
        })
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
