pub mod masked;
pub mod naive;

use std::cmp::Ordering;

/**
Calculates the median of a slice of finite f64 values.

## Arguments
- `values`: A slice of f64 values. NaNs are not filtered here; callers that
  need exclusion must drop them first.

## Returns
The median of the values, or `None` if the slice is empty.
 */
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted_values = values.to_vec();
    sorted_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted_values.len() / 2;
    if sorted_values.len() % 2 == 0 {
        Some((sorted_values[mid - 1] + sorted_values[mid]) / 2.0)
    } else {
        Some(sorted_values[mid])
    }
}

/**
Calculates the arithmetic mean of a slice of f64 values.

## Returns
The mean, or `None` for an empty slice.
 */
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/**
Calculates the variance of a slice of f64 values with `ddof` delta degrees of
freedom (`ddof = 0` is the population variance).

## Returns
The variance, or `None` when `len - ddof` is not positive.
 */
pub fn variance(values: &[f64], ddof: f64) -> Option<f64> {
    let n = values.len() as f64;
    let dof = n - ddof;
    if values.is_empty() || dof <= 0.0 {
        return None;
    }
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>();
    Some(sum_sq / dof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_median_odd() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(median(&values), Some(3.0));
    }

    #[test]
    fn test_median_even() {
        let values = vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0];
        // Sorted: [1, 1, 3, 4, 5, 9]
        assert_eq!(median(&values), Some(3.5));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 6.0]), Some(3.0));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_variance_population() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // (4 + 1 + 0 + 1 + 4) / 5
        assert_relative_eq!(variance(&values, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn test_variance_sample() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(variance(&values, 1.0).unwrap(), 2.5);
    }

    #[test]
    fn test_variance_insufficient_dof() {
        assert_eq!(variance(&[5.0], 1.0), None);
        assert_eq!(variance(&[], 0.0), None);
        assert_eq!(variance(&[5.0], 0.0), Some(0.0));
    }
}
