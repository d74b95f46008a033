//! Core modem traits
//!
//! The constellation trait is the only seam between the symbol alphabet and
//! the modulator/demodulator pair.

mod constellation;

pub use constellation::Constellation;
