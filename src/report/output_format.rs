use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseOutputFormatError;

/// How the probe renders its six result blocks.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    /// Label lines followed by numpy-style `repr` output.
    #[default]
    Repr,
    /// A single pretty-printed JSON document.
    Json,
}

// --- String Conversion ---

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "repr" => Ok(OutputFormat::Repr),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseOutputFormatError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Repr => "repr",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

// --- Serde Integration ---

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.to_string()
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = ParseOutputFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OutputFormat::from_str(&value)
    }
}
