//! BER records and their CSV / console renderings

use std::io::{self, Write};

use qam_modem::ModulationOrder;
use serde::Serialize;

/// Outcome of one sweep point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BerRecord {
    pub modulation: ModulationOrder,
    /// Per-dimension noise variance (N0/2)
    pub noise_variance: f64,
    pub ebn0_db: f64,
    pub errors: usize,
    pub bits: usize,
    pub ber: f64,
    /// Gray-labelled square QAM approximation at the same Eb/N0
    pub theoretical_ber: f64,
}

pub const CSV_HEADER: &str = "Modulation,NoiseVariance,SNR_dB,BER,TheoreticalBER";

/// CSV writer; the header is emitted before the first row
pub struct CsvReport<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        if !self.header_written {
            writeln!(self.out, "{}", CSV_HEADER)?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write_record(&mut self, record: &BerRecord) -> io::Result<()> {
        self.write_header()?;
        // A noiseless point has no finite Eb/N0; leave the field empty
        let ebn0_db = if record.ebn0_db.is_finite() {
            format!("{:.4}", record.ebn0_db)
        } else {
            String::new()
        };
        writeln!(
            self.out,
            "{},{},{},{},{:e}",
            record.modulation.label(),
            record.noise_variance,
            ebn0_db,
            record.ber,
            record.theoretical_ber
        )
    }

    /// Flush and return the underlying writer
    pub fn finish(mut self) -> io::Result<W> {
        self.write_header()?;
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Fixed-width console table grouped by modulation
pub struct ConsoleTable<W: Write> {
    out: W,
    current: Option<ModulationOrder>,
}

const RULE: &str = "-----------|-----------------|------------|-------------";

impl<W: Write> ConsoleTable<W> {
    pub fn new(mut out: W) -> io::Result<Self> {
        writeln!(out, "Modulation | NoiseVar (N0/2) |  SNR (dB)  |    BER")?;
        writeln!(out, "{}", RULE)?;
        Ok(Self { out, current: None })
    }

    pub fn write_record(&mut self, record: &BerRecord) -> io::Result<()> {
        if self.current != Some(record.modulation) {
            if self.current.is_some() {
                writeln!(self.out, "{}", RULE)?;
            }
            writeln!(self.out, "{}:", record.modulation)?;
            self.current = Some(record.modulation);
        }

        writeln!(
            self.out,
            "           | {:>15.8} | {:>10.4} | {:>12.8}",
            record.noise_variance, record.ebn0_db, record.ber
        )
    }

    pub fn finish(mut self) -> io::Result<W> {
        if self.current.is_some() {
            writeln!(self.out, "{}", RULE)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
