//! Modem error types

use thiserror::Error;

/// Result type for modem operations
pub type ModemResult<T> = Result<T, ModemError>;

/// Broad classification shared by every error in the workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction parameters; fatal for the run
    Configuration,
    /// Malformed caller input; surfaced immediately, never retried
    InvalidInput,
    /// Internal invariant broken
    Invariant,
}

/// Errors raised by constellation construction, modulation and demodulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModemError {
    /// Point count that is not one of the supported square orders
    #[error("Unsupported modulation order: {0} points (expected 4, 16 or 64)")]
    UnsupportedOrder(usize),

    /// Modulation name that could not be parsed
    #[error("Unknown modulation type '{0}' (expected qpsk, qam16 or qam64)")]
    UnknownModulation(String),

    /// Bits per symbol that cannot describe a square constellation
    #[error("Invalid bits per symbol: {0} (must be even, between 2 and 16)")]
    InvalidBitsPerSymbol(usize),

    /// Bit vector length is zero or not a multiple of bits per symbol
    #[error("Number of bits ({len}) must be a non-zero multiple of bits per symbol ({bits_per_symbol})")]
    InvalidBitCount { len: usize, bits_per_symbol: usize },

    /// Bit value outside {0, 1}
    #[error("Input bits must be 0 or 1. Found invalid value {value} at index {index}")]
    InvalidBit { index: usize, value: u8 },

    /// Detection attempted without a constellation
    #[error("Constellation map is empty; demodulator not initialized correctly")]
    EmptyConstellation,

    /// Symbol index outside the constellation
    #[error("Symbol index {index} is out of range for a {order}-point constellation")]
    IndexOutOfRange { index: usize, order: usize },
}

impl ModemError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModemError::UnsupportedOrder(_)
            | ModemError::UnknownModulation(_)
            | ModemError::InvalidBitsPerSymbol(_) => ErrorKind::Configuration,
            ModemError::InvalidBitCount { .. } | ModemError::InvalidBit { .. } => {
                ErrorKind::InvalidInput
            }
            ModemError::EmptyConstellation | ModemError::IndexOutOfRange { .. } => {
                ErrorKind::Invariant
            }
        }
    }
}
