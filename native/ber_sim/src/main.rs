//! BER sweep command-line interface

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use ber_sim::{ConsoleTable, CsvReport, NoiseSweep, SimConfig, Simulation};
use clap::Parser;
use qam_modem::ModulationOrder;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "ber_sim")]
#[command(author, version, about = "QAM bit-error-rate sweep over an AWGN channel", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON config file; flags below override its fields
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Modulations to sweep (qpsk, qam16, qam64)
    #[arg(short, long, value_delimiter = ',')]
    modulations: Option<Vec<ModulationOrder>>,

    /// Bits simulated per sweep point
    #[arg(short, long)]
    bits: Option<usize>,

    /// Per-dimension noise variances (N0/2)
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, conflicts_with = "ebn0")]
    variances: Option<Vec<f64>>,

    /// Eb/N0 points in dB
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    ebn0: Option<Vec<f64>>,

    /// CSV output file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip writing the CSV file
    #[arg(long, conflicts_with = "output")]
    no_csv: bool,

    /// Master seed for reproducible runs
    #[arg(long, env = "BER_SIM_SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SimConfig::default(),
        };

        if let Some(modulations) = self.modulations {
            config.modulations = modulations;
        }
        if let Some(bits) = self.bits {
            config.num_bits = bits;
        }
        if let Some(variances) = self.variances {
            config.sweep = NoiseSweep::Variance(variances);
        }
        if let Some(levels) = self.ebn0 {
            config.sweep = NoiseSweep::EbN0Db(levels);
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if self.no_csv {
            config.output = None;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = cli.into_config()?;
    info!(?config, "configuration loaded");

    let mut csv = match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to open output file: {}", path.display()))?;
            Some(CsvReport::new(BufWriter::new(file)))
        }
        None => None,
    };

    println!("Starting simulation...");
    if let Some(path) = &config.output {
        println!("Saving results to: {}\n", path.display());
    }

    let mut table = ConsoleTable::new(io::stdout().lock())?;
    let mut simulation = Simulation::from_config(config);

    simulation
        .run(|record| {
            table.write_record(record)?;
            if let Some(csv) = csv.as_mut() {
                csv.write_record(record)?;
            }
            Ok(())
        })
        .context("Simulation failed")?;

    table.finish()?;
    if let Some(csv) = csv {
        csv.finish().context("Failed to flush CSV output")?;
    }

    println!("\nSimulation finished successfully.");
    Ok(())
}
