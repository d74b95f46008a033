//! NIF interface for Elixir
//!
//! Exposes the QAM modulator and demodulator as Rustler resources.
//! Modulation type is selected at construction time via atom matching.
//! Symbols cross the boundary as `{re, im}` float tuples.

use num_complex::Complex64;
use rustler::{Atom, NifResult, ResourceArc};

use crate::constellations::SquareQam;
use crate::error::ModemError;
use crate::modem::{QamDemodulator, QamModulator};
use crate::order::ModulationOrder;
use crate::traits::Constellation;

rustler::atoms! {
    // Modulation types
    qpsk,
    qam16,
    qam64,
}

fn atom_to_modulation(atom: Atom) -> Result<ModulationOrder, &'static str> {
    if atom == qpsk() {
        Ok(ModulationOrder::Qpsk)
    } else if atom == qam16() {
        Ok(ModulationOrder::Qam16)
    } else if atom == qam64() {
        Ok(ModulationOrder::Qam64)
    } else {
        Err("unsupported modulation type")
    }
}

fn modem_error(e: ModemError) -> rustler::Error {
    rustler::Error::Term(Box::new(e.to_string()))
}

fn to_pairs(symbols: &[Complex64]) -> Vec<(f64, f64)> {
    symbols.iter().map(|s| (s.re, s.im)).collect()
}

fn from_pairs(pairs: &[(f64, f64)]) -> Vec<Complex64> {
    pairs.iter().map(|&(re, im)| Complex64::new(re, im)).collect()
}

/// NIF resource wrapper for modulator
///
/// The modem is immutable after construction, so no lock is needed.
pub struct ModulatorResource {
    pub inner: QamModulator,
}

/// NIF resource wrapper for demodulator
pub struct DemodulatorResource {
    pub inner: QamDemodulator,
}

// ============================================================================
// Modulator NIFs
// ============================================================================

/// Create a new modulator
///
/// # Arguments
/// * `modulation` - Atom: :qpsk, :qam16, :qam64
#[rustler::nif]
pub fn mod_new(modulation: Atom) -> NifResult<ResourceArc<ModulatorResource>> {
    let modulation = atom_to_modulation(modulation)
        .map_err(|e| rustler::Error::Term(Box::new(e)))?;
    let inner = QamModulator::new(modulation).map_err(modem_error)?;

    Ok(ResourceArc::new(ModulatorResource { inner }))
}

/// Modulate bits to `{re, im}` symbols
#[rustler::nif]
pub fn mod_modulate(
    modulator: ResourceArc<ModulatorResource>,
    bits: Vec<u8>,
) -> NifResult<Vec<(f64, f64)>> {
    let symbols = modulator.inner.modulate(&bits).map_err(modem_error)?;
    Ok(to_pairs(&symbols))
}

// ============================================================================
// Demodulator NIFs
// ============================================================================

/// Create a new demodulator
#[rustler::nif]
pub fn demod_new(modulation: Atom) -> NifResult<ResourceArc<DemodulatorResource>> {
    let modulation = atom_to_modulation(modulation)
        .map_err(|e| rustler::Error::Term(Box::new(e)))?;
    let inner = QamDemodulator::new(modulation).map_err(modem_error)?;

    Ok(ResourceArc::new(DemodulatorResource { inner }))
}

/// Demodulate `{re, im}` symbols to bits
#[rustler::nif]
pub fn demod_demodulate(
    demodulator: ResourceArc<DemodulatorResource>,
    symbols: Vec<(f64, f64)>,
) -> NifResult<Vec<u8>> {
    demodulator
        .inner
        .demodulate(&from_pairs(&symbols))
        .map_err(modem_error)
}

/// Constellation points for a modulation type, indexed by symbol
#[rustler::nif]
pub fn constellation(modulation: Atom) -> NifResult<Vec<(f64, f64)>> {
    let modulation = atom_to_modulation(modulation)
        .map_err(|e| rustler::Error::Term(Box::new(e)))?;
    let qam = SquareQam::new(modulation).map_err(modem_error)?;

    Ok(to_pairs(qam.points()))
}
