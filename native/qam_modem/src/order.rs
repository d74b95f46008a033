//! Supported modulation orders
//!
//! Only square constellations are supported, so every order carries an
//! even number of bits per symbol split evenly between I and Q.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModemError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModulationOrder {
    #[serde(rename = "QPSK")]
    Qpsk,
    #[serde(rename = "QAM16")]
    Qam16,
    #[serde(rename = "QAM64")]
    Qam64,
}

impl ModulationOrder {
    pub const ALL: [ModulationOrder; 3] = [Self::Qpsk, Self::Qam16, Self::Qam64];

    /// Number of constellation points
    pub fn order(&self) -> usize {
        match self {
            Self::Qpsk => 4,
            Self::Qam16 => 16,
            Self::Qam64 => 64,
        }
    }

    pub fn bits_per_symbol(&self) -> usize {
        match self {
            Self::Qpsk => 2,
            Self::Qam16 => 4,
            Self::Qam64 => 6,
        }
    }

    /// Report label, as written to CSV and console output
    pub fn label(&self) -> &'static str {
        match self {
            Self::Qpsk => "QPSK",
            Self::Qam16 => "QAM16",
            Self::Qam64 => "QAM64",
        }
    }

    /// Look up the order with the given number of points
    pub fn from_order(points: usize) -> Result<Self, ModemError> {
        match points {
            4 => Ok(Self::Qpsk),
            16 => Ok(Self::Qam16),
            64 => Ok(Self::Qam64),
            other => Err(ModemError::UnsupportedOrder(other)),
        }
    }
}

impl fmt::Display for ModulationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ModulationOrder {
    type Err = ModemError;

    /// Accepts `qpsk`, `qam4`, `qam16`, `16qam`, `qam64`, `64qam` or a bare
    /// point count, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace(&['-', '_'][..], "");
        match name.as_str() {
            "qpsk" | "qam4" | "4qam" => Ok(Self::Qpsk),
            "qam16" | "16qam" => Ok(Self::Qam16),
            "qam64" | "64qam" => Ok(Self::Qam64),
            _ => match name.parse::<usize>() {
                Ok(points) => Self::from_order(points),
                Err(_) => Err(ModemError::UnknownModulation(s.to_string())),
            },
        }
    }
}

impl TryFrom<usize> for ModulationOrder {
    type Error = ModemError;

    fn try_from(points: usize) -> Result<Self, Self::Error> {
        Self::from_order(points)
    }
}
