//! Seeded synthetic sample matrices.

use ndarray::{s, Array2};
use rand::{rngs::StdRng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};
use tracing::{debug, instrument};

use crate::error::ProbeError;

/// Seeded source of standard normal draws.
///
/// The same seed always yields the same sequence, so every matrix built from
/// it is bit-reproducible for a given `rand`/`rand_distr` version.
pub struct NormalSource {
    inner: StdRng,
    seed: u64,
}

impl NormalSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Draws a `(rows, cols)` matrix, filling it in row-major order.
    #[instrument(level = "debug", skip(self))]
    pub fn normal_matrix(&mut self, rows: usize, cols: usize) -> Result<Array2<f64>, ProbeError> {
        if rows == 0 || cols == 0 {
            return Err(ProbeError::EmptyShape { rows, cols });
        }
        let len = checked_len(rows, cols)?;
        let values: Vec<f64> = (0..len).map(|_| self.gen_normal()).collect();
        let matrix = Array2::from_shape_vec((rows, cols), values)?;
        debug!(seed = self.seed, ?rows, ?cols, "Generated normal sample matrix");
        Ok(matrix)
    }
}

/// Element count of a `(rows, cols)` matrix, bounded the way ndarray bounds
/// array sizes (`isize::MAX`).
pub fn checked_len(rows: usize, cols: usize) -> Result<usize, ProbeError> {
    rows.checked_mul(cols)
        .filter(|len| *len <= isize::MAX as usize)
        .ok_or(ProbeError::ShapeTooLarge { rows, cols })
}

/// Overwrites `column` in every row with NaN to simulate a missing observation.
pub fn inject_invalid_column(matrix: &mut Array2<f64>, column: usize) -> Result<(), ProbeError> {
    let cols = matrix.ncols();
    if column >= cols {
        return Err(ProbeError::ColumnOutOfBounds { column, cols });
    }
    matrix.slice_mut(s![.., column]).fill(f64::NAN);
    debug!(column, "Injected NaN column");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_matrix() {
        let a = NormalSource::from_seed(0).normal_matrix(2, 101).unwrap();
        let b = NormalSource::from_seed(0).normal_matrix(2, 101).unwrap();
        assert_eq!(a.shape(), &[2, 101]);
        // Bitwise comparison, not approximate
        let bits_a: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_different_seed_different_matrix() {
        let a = NormalSource::from_seed(0).normal_matrix(2, 10).unwrap();
        let b = NormalSource::from_seed(1).normal_matrix(2, 10).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_row_major_fill_order() {
        let matrix = NormalSource::from_seed(5).normal_matrix(2, 3).unwrap();
        let mut source = NormalSource::from_seed(5);
        let expected: Vec<f64> = (0..6).map(|_| source.gen_normal()).collect();
        assert_eq!(matrix[[0, 0]], expected[0]);
        assert_eq!(matrix[[0, 2]], expected[2]);
        assert_eq!(matrix[[1, 0]], expected[3]);
        assert_eq!(matrix[[1, 2]], expected[5]);
    }

    #[test]
    fn test_samples_are_finite_and_roughly_standard() {
        let matrix = NormalSource::from_seed(0).normal_matrix(50, 200).unwrap();
        assert!(matrix.iter().all(|v| v.is_finite()));
        let mean = matrix.mean().unwrap();
        assert!(mean.abs() < 0.1, "mean was {}", mean);
    }

    #[test]
    fn test_empty_shape_rejected() {
        let result = NormalSource::from_seed(0).normal_matrix(0, 5);
        assert!(matches!(result, Err(ProbeError::EmptyShape { rows: 0, cols: 5 })));
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let result = NormalSource::from_seed(0).normal_matrix(usize::MAX, 3);
        assert!(matches!(
            result,
            Err(ProbeError::ShapeTooLarge { rows: usize::MAX, cols: 3 })
        ));
        assert!(checked_len(usize::MAX / 2 + 1, 1).is_err());
        assert_eq!(checked_len(2, 101).unwrap(), 202);
    }

    #[test]
    fn test_inject_invalid_column() {
        let mut matrix = NormalSource::from_seed(0).normal_matrix(2, 101).unwrap();
        inject_invalid_column(&mut matrix, 2).unwrap();
        for row in matrix.rows() {
            let nan_positions: Vec<usize> = row
                .iter()
                .enumerate()
                .filter(|(_, v)| v.is_nan())
                .map(|(i, _)| i)
                .collect();
            assert_eq!(nan_positions, vec![2]);
            assert_eq!(row.iter().filter(|v| v.is_finite()).count(), 100);
        }
    }

    #[test]
    fn test_inject_invalid_column_out_of_bounds() {
        let mut matrix = Array2::<f64>::zeros((2, 3));
        let result = inject_invalid_column(&mut matrix, 3);
        assert!(matches!(
            result,
            Err(ProbeError::ColumnOutOfBounds { column: 3, cols: 3 })
        ));
        assert!(matrix.iter().all(|v| *v == 0.0));
    }
}
