//! NIF interface for Elixir
//!
//! Each channel is a Rustler resource holding its own locked PRNG, so
//! separate channels never contend.

use std::sync::Mutex;

use num_complex::Complex64;
use rustler::{NifResult, ResourceArc};

use crate::channel::AwgnChannel;

/// NIF resource wrapper for a channel
pub struct ChannelResource {
    pub inner: Mutex<AwgnChannel>,
}

/// Create a new channel
///
/// # Arguments
/// * `seed` - Integer seed for a reproducible channel, `nil` for entropy
#[rustler::nif]
pub fn channel_new(seed: Option<u64>) -> ResourceArc<ChannelResource> {
    let channel = match seed {
        Some(seed) => AwgnChannel::seeded(seed),
        None => AwgnChannel::from_entropy(),
    };

    ResourceArc::new(ChannelResource {
        inner: Mutex::new(channel),
    })
}

/// Add noise to `{re, im}` symbols at the given per-dimension variance
#[rustler::nif]
pub fn channel_add_noise(
    channel: ResourceArc<ChannelResource>,
    symbols: Vec<(f64, f64)>,
    variance: f64,
) -> NifResult<Vec<(f64, f64)>> {
    let mut state = channel
        .inner
        .lock()
        .map_err(|_| rustler::Error::Term(Box::new("lock poisoned")))?;

    let mut buffer: Vec<Complex64> = symbols
        .iter()
        .map(|&(re, im)| Complex64::new(re, im))
        .collect();

    state
        .add_noise_in_place(&mut buffer, variance)
        .map_err(|e| rustler::Error::Term(Box::new(e.to_string())))?;

    Ok(buffer.iter().map(|s| (s.re, s.im)).collect())
}
