//! Plain axis statistics with IEEE NaN propagation.
//!
//! Nothing is excluded here: a lane holding a NaN produces NaN for every
//! aggregate, the median included.

use ndarray::{Array1, Array2, Axis, Zip};

use crate::stats;

/// Mean of each lane along `axis`. An empty axis gives NaN lanes.
pub fn mean_axis(data: &Array2<f64>, axis: Axis) -> Array1<f64> {
    data.mean_axis(axis)
        .unwrap_or_else(|| Array1::from_elem(data.len_of(other(axis)), f64::NAN))
}

pub fn var_axis(data: &Array2<f64>, axis: Axis, ddof: f64) -> Array1<f64> {
    Zip::from(data.lanes(axis))
        .map_collect(|lane| stats::variance(lane.to_vec().as_slice(), ddof).unwrap_or(f64::NAN))
}

pub fn std_axis(data: &Array2<f64>, axis: Axis, ddof: f64) -> Array1<f64> {
    var_axis(data, axis, ddof).mapv(f64::sqrt)
}

pub fn median_axis(data: &Array2<f64>, axis: Axis) -> Array1<f64> {
    Zip::from(data.lanes(axis)).map_collect(|lane| {
        if lane.iter().any(|v| v.is_nan()) {
            f64::NAN
        } else {
            stats::median(lane.to_vec().as_slice()).unwrap_or(f64::NAN)
        }
    })
}

fn other(axis: Axis) -> Axis {
    Axis(1 - axis.index())
}
