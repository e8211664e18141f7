//! Missing-value-aware views over 2D sample matrices.
//!
//! A [`MaskedArray`] keeps the raw data untouched and pairs it with a boolean
//! mask of the same shape. Masked entries are skipped by every aggregate, and
//! a lane with nothing left to aggregate produces a masked result entry.

use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};
use serde::{Serialize, Serializer};
use tracing::{debug, instrument};

use crate::{error::ProbeError, stats};

/// Default fill value for float masked arrays.
pub const DEFAULT_FILL_VALUE: f64 = 1e20;

#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray {
    data: Array2<f64>,
    mask: Array2<bool>,
    fill_value: f64,
}

impl MaskedArray {
    /// Wraps `data`, masking every non-finite entry.
    pub fn masked_invalid(data: Array2<f64>) -> Self {
        let mask = data.mapv(|v| !v.is_finite());
        debug!(masked = mask.iter().filter(|m| **m).count(), "Built masked view");
        Self {
            data,
            mask,
            fill_value: DEFAULT_FILL_VALUE,
        }
    }

    /// Wraps `data` with an explicit mask. Non-finite entries are masked as
    /// well, whatever the mask says.
    pub fn with_mask(data: Array2<f64>, mask: Array2<bool>) -> Result<Self, ProbeError> {
        if data.dim() != mask.dim() {
            return Err(ProbeError::MaskShapeMismatch {
                data: data.dim(),
                mask: mask.dim(),
            });
        }
        let mut masked = Self::masked_invalid(data);
        Zip::from(&mut masked.mask)
            .and(&mask)
            .for_each(|m, &explicit| *m |= explicit);
        Ok(masked)
    }

    /// Flags every entry of `column` as masked.
    pub fn mask_column(&mut self, column: usize) -> Result<(), ProbeError> {
        let cols = self.data.ncols();
        if column >= cols {
            return Err(ProbeError::ColumnOutOfBounds { column, cols });
        }
        self.mask.column_mut(column).fill(true);
        Ok(())
    }

    pub fn set_fill_value(&mut self, fill_value: f64) {
        self.fill_value = fill_value;
    }

    pub fn data(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Copy of the data with masked entries replaced by `value`.
    pub fn filled(&self, value: f64) -> Array2<f64> {
        let mut out = self.data.clone();
        Zip::from(&mut out)
            .and(&self.mask)
            .for_each(|v, &m| {
                if m {
                    *v = value;
                }
            });
        out
    }

    /// Number of unmasked entries in each lane along `axis`.
    pub fn count_axis(&self, axis: Axis) -> Array1<usize> {
        Zip::from(self.mask.lanes(axis)).map_collect(|lane| lane.iter().filter(|m| !**m).count())
    }

    pub fn sum_axis(&self, axis: Axis) -> MaskedVec {
        self.reduce_axis(axis, |values| Some(values.iter().sum()))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn mean_axis(&self, axis: Axis) -> MaskedVec {
        self.reduce_axis(axis, stats::mean)
    }

    pub fn var_axis(&self, axis: Axis, ddof: f64) -> MaskedVec {
        self.reduce_axis(axis, |values| stats::variance(values, ddof))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn std_axis(&self, axis: Axis, ddof: f64) -> MaskedVec {
        self.reduce_axis(axis, |values| stats::variance(values, ddof).map(f64::sqrt))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn median_axis(&self, axis: Axis) -> MaskedVec {
        self.reduce_axis(axis, stats::median)
    }

    /// Applies `f` to the unmasked values of each lane along `axis`.
    /// `None` from `f` becomes a masked entry.
    fn reduce_axis<F>(&self, axis: Axis, f: F) -> MaskedVec
    where
        F: Fn(&[f64]) -> Option<f64>,
    {
        let results: Array1<Option<f64>> = Zip::from(self.data.lanes(axis))
            .and(self.mask.lanes(axis))
            .map_collect(|data, mask| f(unmasked(data, mask).as_slice()));
        MaskedVec {
            data: results.mapv(|r| r.unwrap_or(0.0)),
            mask: results.mapv(|r| r.is_none()),
            fill_value: self.fill_value,
        }
    }
}

fn unmasked(data: ArrayView1<f64>, mask: ArrayView1<bool>) -> Vec<f64> {
    data.iter()
        .zip(mask.iter())
        .filter(|(_, m)| !**m)
        .map(|(v, _)| *v)
        .collect()
}

/// One-dimensional masked result of an axis reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedVec {
    data: Array1<f64>,
    mask: Array1<bool>,
    fill_value: f64,
}

impl MaskedVec {
    pub fn new(data: Array1<f64>, mask: Array1<bool>, fill_value: f64) -> Result<Self, ProbeError> {
        if data.len() != mask.len() {
            return Err(ProbeError::MaskShapeMismatch {
                data: (1, data.len()),
                mask: (1, mask.len()),
            });
        }
        Ok(Self {
            data,
            mask,
            fill_value,
        })
    }

    pub fn data(&self) -> &Array1<f64> {
        &self.data
    }

    pub fn mask(&self) -> &Array1<bool> {
        &self.mask
    }

    pub fn fill_value(&self) -> f64 {
        self.fill_value
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn any_masked(&self) -> bool {
        self.mask.iter().any(|m| *m)
    }

    /// The value at `index`, or `None` when it is masked or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        match self.mask.get(index) {
            Some(false) => self.data.get(index).copied(),
            _ => None,
        }
    }

    pub fn filled(&self) -> Array1<f64> {
        Zip::from(&self.data)
            .and(&self.mask)
            .map_collect(|&v, &m| if m { self.fill_value } else { v })
    }
}

impl Serialize for MaskedVec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<Option<f64>> = (0..self.len())
            .map(|i| self.get(i).filter(|v| v.is_finite()))
            .collect();
        values.serialize(serializer)
    }
}
