//! Modulator and demodulator
//!
//! Both build the same `SquareQam` constellation at construction and never
//! mutate it afterwards.

mod modulator;
mod demodulator;

pub use modulator::QamModulator;
pub use demodulator::QamDemodulator;
