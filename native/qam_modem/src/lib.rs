//! QAM Modem - Square QAM constellations, modulator and demodulator
//!
//! This crate maps bits to complex baseband symbols and back for the
//! square QAM orders used in BER sweeps (QPSK, 16-QAM, 64-QAM). Noise,
//! bit generation and reporting live in sibling crates.

pub mod constellations;
pub mod error;
pub mod modem;
pub mod order;
pub mod traits;

#[cfg(feature = "nif")]
pub mod nif;

// Re-export core types for convenience
pub use constellations::{build_constellation, SquareQam};
pub use error::{ErrorKind, ModemError, ModemResult};
pub use modem::{QamDemodulator, QamModulator};
pub use num_complex::Complex64;
pub use order::ModulationOrder;
pub use traits::Constellation;

#[cfg(feature = "nif")]
fn on_load(env: rustler::Env, _info: rustler::Term) -> bool {
    let _ = rustler::resource!(nif::ModulatorResource, env);
    let _ = rustler::resource!(nif::DemodulatorResource, env);
    true
}

#[cfg(feature = "nif")]
rustler::init!("Elixir.QamBer.Native.Modem", load = on_load);
