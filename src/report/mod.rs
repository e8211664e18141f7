pub mod output_format;
pub mod repr;

use std::fmt::Write as _;

use ndarray::Array1;
use serde::{Serialize, Serializer};

use crate::{error::ProbeError, stats::masked::MaskedVec};

use self::output_format::OutputFormat;

/// Standard deviation, median and mean computed under one semantics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatSet<T> {
    pub std: T,
    pub median: T,
    pub mean: T,
}

impl<T> StatSet<T> {
    /// The three results paired with their label, in print order.
    pub fn labelled(&self) -> [(&'static str, &T); 3] {
        [("std", &self.std), ("median", &self.median), ("mean", &self.mean)]
    }
}

/// Plain result vector; NaN serialises as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct NaiveVec(pub Array1<f64>);

impl Serialize for NaiveVec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<Option<f64>> = self.0.iter().map(|v| v.is_finite().then_some(*v)).collect();
        values.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub seed: u64,
    pub shape: (usize, usize),
    #[serde(rename = "invalid-column")]
    pub invalid_column: usize,
    pub ddof: f64,
    pub masked: StatSet<MaskedVec>,
    pub naive: StatSet<NaiveVec>,
}

impl ProbeReport {
    /// Renders the report in `format`. The result always ends with a newline.
    pub fn render(&self, format: OutputFormat) -> Result<String, ProbeError> {
        match format {
            OutputFormat::Repr => Ok(self.render_repr()),
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(self)?;
                out.push('\n');
                Ok(out)
            }
        }
    }

    /// Six `label:` / repr blocks, masked results first.
    pub fn render_repr(&self) -> String {
        let mut out = String::new();
        for (label, values) in self.masked.labelled() {
            let _ = writeln!(out, "{}:\n{}", label, repr::masked_array_repr(values));
        }
        for (label, values) in self.naive.labelled() {
            let _ = writeln!(out, "{}:\n{}", label, repr::array_repr(&values.0));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::masked::DEFAULT_FILL_VALUE;
    use ndarray::array;

    fn report() -> ProbeReport {
        let masked = |a: f64, b: f64| {
            MaskedVec::new(array![a, b], array![false, false], DEFAULT_FILL_VALUE).unwrap()
        };
        let nan = || NaiveVec(array![f64::NAN, f64::NAN]);
        ProbeReport {
            seed: 0,
            shape: (2, 101),
            invalid_column: 2,
            ddof: 0.0,
            masked: StatSet {
                std: masked(1.0, 1.5),
                median: masked(0.25, -0.5),
                mean: masked(0.5, 0.0),
            },
            naive: StatSet {
                std: nan(),
                median: nan(),
                mean: nan(),
            },
        }
    }

    #[test]
    fn test_render_repr_block_order() {
        let text = report().render_repr();
        let labels: Vec<&str> = text.lines().filter(|l| l.ends_with(':')).collect();
        assert_eq!(labels, vec!["std:", "median:", "mean:", "std:", "median:", "mean:"]);
        assert!(text.starts_with("std:\nmasked_array(data=[1. , 1.5],\n"));
        assert!(text.ends_with("mean:\narray([nan, nan])\n"));
        assert_eq!(text.matches("array([nan, nan])").count(), 3);
    }

    #[test]
    fn test_render_json() {
        let text = report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["seed"], 0);
        assert_eq!(value["invalid-column"], 2);
        assert_eq!(value["masked"]["median"], serde_json::json!([0.25, -0.5]));
        assert_eq!(value["naive"]["mean"], serde_json::json!([null, null]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = report().render(OutputFormat::Repr).unwrap();
        let b = report().render(OutputFormat::Repr).unwrap();
        assert_eq!(a, b);
    }
}
