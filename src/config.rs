use std::{
    fs::File,
    io::{BufReader, Write as _},
    path::Path,
};

use serde::{Deserialize, Serialize};
use serde_yaml::from_reader;
use tracing::{debug, info, instrument};

use crate::{data::sample::checked_len, error::ProbeError, report::output_format::OutputFormat};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ProbeConfig {
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    #[serde(rename = "invalid-column", default = "default_invalid_column")]
    pub invalid_column: usize,
    #[serde(default)]
    pub ddof: f64,
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_rows() -> usize {
    2
}

fn default_cols() -> usize {
    101
}

fn default_invalid_column() -> usize {
    2
}

const DEFAULT_DATA: &str = r#"
seed: 0
rows: 2
cols: 101
invalid-column: 2
ddof: 0.0
format: "repr"
"#;

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            rows: default_rows(),
            cols: default_cols(),
            invalid_column: default_invalid_column(),
            ddof: 0.0,
            format: OutputFormat::Repr,
        }
    }
}

impl ProbeConfig {
    /// Reads the configuration from a YAML file.
    ///
    /// Without a path the built-in defaults are returned and no file is touched.
    /// If a path is given but the file does not exist, a default configuration
    /// file is written there.
    #[instrument(level = "debug", skip(filename))]
    pub fn read_config<P: AsRef<Path>>(filename: Option<P>) -> Result<Self, ProbeError> {
        let Some(path) = filename.map(|p| p.as_ref().to_path_buf()) else {
            debug!("No config path given, using defaults");
            return Ok(ProbeConfig::default());
        };

        info!(path = %path.display(), "Reading configuration");

        if !path.exists() {
            info!(
                "Config file does not exist. Creating default config at {}",
                path.display()
            );
            let mut file = File::create(&path)?;
            file.write_all(DEFAULT_DATA.as_bytes())?;
            debug!("Default configuration file created");
            return Ok(ProbeConfig::default());
        }

        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let config: Self = from_reader(reader)?;
        debug!(?config, "Configuration loaded successfully");
        Ok(config)
    }

    /// Checks that the shape, invalid column and ddof describe a computable probe.
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ProbeError::EmptyShape {
                rows: self.rows,
                cols: self.cols,
            });
        }
        checked_len(self.rows, self.cols)?;
        if self.invalid_column >= self.cols {
            return Err(ProbeError::ColumnOutOfBounds {
                column: self.invalid_column,
                cols: self.cols,
            });
        }
        // One column per row is masked, so cols - 1 entries remain valid.
        if self.cols < 2 {
            return Err(ProbeError::NoValidColumns { cols: self.cols });
        }
        let valid = self.cols - 1;
        if self.ddof.is_nan() || self.ddof < 0.0 || self.ddof >= valid as f64 {
            return Err(ProbeError::InvalidDdof {
                ddof: self.ddof,
                count: valid,
            });
        }
        Ok(())
    }
}
