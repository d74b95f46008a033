//! Simulation configuration
//!
//! Defaults reproduce the reference sweep. A JSON file can override any
//! field; command-line flags are applied on top by the binary.

use std::fs;
use std::path::{Path, PathBuf};

use awgn_channel::snr;
use qam_modem::ModulationOrder;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Noise levels to sweep, either as raw variances or as Eb/N0 in dB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum NoiseSweep {
    /// Per-dimension noise variance (N0/2)
    Variance(Vec<f64>),
    /// Eb/N0 in dB, converted per modulation assuming unit symbol energy
    EbN0Db(Vec<f64>),
}

/// One sweep point resolved for a given modulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoisePoint {
    pub variance: f64,
    pub ebn0_db: f64,
}

impl NoiseSweep {
    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    fn values(&self) -> &[f64] {
        match self {
            NoiseSweep::Variance(v) | NoiseSweep::EbN0Db(v) => v,
        }
    }

    /// Resolve every point to a variance and Eb/N0 for `bits_per_symbol`
    pub fn points(&self, bits_per_symbol: usize) -> Vec<NoisePoint> {
        match self {
            NoiseSweep::Variance(variances) => variances
                .iter()
                .map(|&variance| NoisePoint {
                    variance,
                    ebn0_db: snr::ebn0_db_for_variance(variance, bits_per_symbol),
                })
                .collect(),
            NoiseSweep::EbN0Db(levels) => levels
                .iter()
                .map(|&ebn0_db| NoisePoint {
                    variance: snr::variance_for_ebn0_db(ebn0_db, bits_per_symbol),
                    ebn0_db,
                })
                .collect(),
        }
    }
}

impl Default for NoiseSweep {
    fn default() -> Self {
        NoiseSweep::Variance(vec![
            0.001, 0.002, 0.005, 0.01, 0.02, 0.05, 0.1, 0.2, 0.5, 1.0,
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub modulations: Vec<ModulationOrder>,
    /// Bits simulated per sweep point
    pub num_bits: usize,
    pub sweep: NoiseSweep,
    /// CSV destination, `None` to skip the file
    pub output: Option<PathBuf>,
    /// Master seed; `None` seeds from system entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            modulations: ModulationOrder::ALL.to_vec(),
            num_bits: 120_000,
            sweep: NoiseSweep::default(),
            output: Some(PathBuf::from("simulation_results.csv")),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Load a config from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| SimError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Check settings that would make the sweep meaningless
    pub fn validate(&self) -> SimResult<()> {
        if self.modulations.is_empty() {
            return Err(SimError::Config("no modulations selected".into()));
        }
        if self.num_bits == 0 {
            return Err(SimError::Config("number of bits must be positive".into()));
        }
        if self.sweep.is_empty() {
            return Err(SimError::Config("noise sweep is empty".into()));
        }
        match &self.sweep {
            NoiseSweep::Variance(v) => {
                if let Some(bad) = v.iter().find(|x| !x.is_finite() || **x < 0.0) {
                    return Err(SimError::Config(format!(
                        "noise variance must be non-negative and finite, got {}",
                        bad
                    )));
                }
            }
            NoiseSweep::EbN0Db(v) => {
                if let Some(bad) = v.iter().find(|x| !x.is_finite()) {
                    return Err(SimError::Config(format!("Eb/N0 must be finite, got {}", bad)));
                }
            }
        }
        Ok(())
    }
}
