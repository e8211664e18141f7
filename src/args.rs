use std::path::PathBuf;

use clap::Parser;

use crate::{config::ProbeConfig, report::output_format::OutputFormat};

/// Compares masked and NaN-propagating statistics on a seeded sample matrix.
#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub struct Args {
    /// YAML config file; a default one is written if the path does not exist
    #[arg(short, long, env = "MASKPROBE_CONFIG")]
    pub config: Option<PathBuf>,
    /// Seed for the normal sample generator
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Number of matrix rows
    #[arg(long)]
    pub rows: Option<usize>,
    /// Number of matrix columns
    #[arg(long)]
    pub cols: Option<usize>,
    /// Column overwritten with NaN in every row
    #[arg(short, long)]
    pub invalid_column: Option<usize>,
    /// Delta degrees of freedom for the standard deviation
    #[arg(long)]
    pub ddof: Option<f64>,
    /// Output format: `repr` or `json`
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
    /// Also write DEBUG logs to a timestamped file in this directory
    #[arg(long, env = "MASKPROBE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    /// Overrides `config` with every flag that was given.
    pub fn apply(&self, mut config: ProbeConfig) -> ProbeConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(invalid_column) = self.invalid_column {
            config.invalid_column = invalid_column;
        }
        if let Some(ddof) = self.ddof {
            config.ddof = ddof;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}
