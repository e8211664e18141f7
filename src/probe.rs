use ndarray::{Array2, Axis};
use tracing::{debug, info, instrument};

use crate::{
    config::ProbeConfig,
    data::sample::{inject_invalid_column, NormalSource},
    error::ProbeError,
    report::{NaiveVec, ProbeReport, StatSet},
    stats::{
        masked::{MaskedArray, MaskedVec},
        naive,
    },
};

/// Statistics are reduced across columns, one result per row.
pub const STAT_AXIS: Axis = Axis(1);

/// Generates the seeded matrix and overwrites the invalid column with NaN.
#[instrument(level = "debug", skip(config), fields(seed = config.seed))]
pub fn build_matrix(config: &ProbeConfig) -> Result<Array2<f64>, ProbeError> {
    config.validate()?;
    let mut source = NormalSource::from_seed(config.seed);
    let mut matrix = source.normal_matrix(config.rows, config.cols)?;
    inject_invalid_column(&mut matrix, config.invalid_column)?;
    Ok(matrix)
}

pub fn masked_stats(matrix: &Array2<f64>, ddof: f64) -> StatSet<MaskedVec> {
    let masked = MaskedArray::masked_invalid(matrix.clone());
    debug!(counts = ?masked.count_axis(STAT_AXIS), "Unmasked entries per row");
    StatSet {
        std: masked.std_axis(STAT_AXIS, ddof),
        median: masked.median_axis(STAT_AXIS),
        mean: masked.mean_axis(STAT_AXIS),
    }
}

pub fn naive_stats(matrix: &Array2<f64>, ddof: f64) -> StatSet<NaiveVec> {
    StatSet {
        std: NaiveVec(naive::std_axis(matrix, STAT_AXIS, ddof)),
        median: NaiveVec(naive::median_axis(matrix, STAT_AXIS)),
        mean: NaiveVec(naive::mean_axis(matrix, STAT_AXIS)),
    }
}

/// Runs the whole probe: generate, corrupt, then compute both stat sets.
#[instrument(level = "info", skip(config))]
pub fn run_probe(config: &ProbeConfig) -> Result<ProbeReport, ProbeError> {
    let matrix = build_matrix(config)?;
    let masked = masked_stats(&matrix, config.ddof);
    let naive = naive_stats(&matrix, config.ddof);
    info!(
        rows = config.rows,
        cols = config.cols,
        invalid_column = config.invalid_column,
        "Probe computed"
    );
    Ok(ProbeReport {
        seed: config.seed,
        shape: matrix.dim(),
        invalid_column: config.invalid_column,
        ddof: config.ddof,
        masked,
        naive,
    })
}
