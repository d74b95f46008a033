//! AWGN Channel - Additive white Gaussian noise for complex baseband symbols
//!
//! Perturbs each symbol with independent zero-mean Gaussian noise on the
//! real and imaginary axes. No fading, multipath or frequency effects.

pub mod channel;
pub mod error;
pub mod noise;
pub mod snr;

#[cfg(feature = "nif")]
pub mod nif;

pub use channel::{AwgnChannel, MIN_NOISE_VARIANCE};
pub use error::{ChannelError, ChannelResult};
pub use noise::ComplexNoise;

#[cfg(feature = "nif")]
fn on_load(env: rustler::Env, _info: rustler::Term) -> bool {
    let _ = rustler::resource!(nif::ChannelResource, env);
    true
}

#[cfg(feature = "nif")]
rustler::init!("Elixir.QamBer.Native.Channel", load = on_load);
