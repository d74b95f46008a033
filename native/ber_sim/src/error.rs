//! Simulation error types

use std::io;
use std::path::PathBuf;

use awgn_channel::ChannelError;
use qam_modem::{ErrorKind, ModemError};
use thiserror::Error;

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum SimError {
    #[error(transparent)]
    Modem(#[from] ModemError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    /// Transmitted and recovered bit vectors differ in length
    #[error("Bit vectors have different sizes ({expected} vs {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid simulation settings
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file that is not valid JSON for `SimConfig`
    #[error("Failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SimError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::Modem(e) => e.kind(),
            SimError::Channel(_) => ErrorKind::InvalidInput,
            SimError::LengthMismatch { .. } => ErrorKind::Invariant,
            SimError::Config(_) | SimError::ConfigParse { .. } => ErrorKind::Configuration,
            SimError::Io(_) => ErrorKind::Configuration,
        }
    }
}
