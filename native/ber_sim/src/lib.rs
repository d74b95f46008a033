//! BER Sim - Bit-error-rate sweeps for square QAM over AWGN
//!
//! Drives `qam_modem` and `awgn_channel`: generates random bits, runs them
//! through modulator, channel and demodulator at each noise level, and
//! reports measured BER next to the theoretical curve.

pub mod bits;
pub mod config;
pub mod error;
pub mod report;
pub mod sweep;
pub mod theory;

pub use config::{NoiseSweep, SimConfig};
pub use error::{SimError, SimResult};
pub use report::{BerRecord, ConsoleTable, CsvReport};
pub use sweep::Simulation;
