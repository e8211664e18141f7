//! numpy-style `repr` rendering for 1D float results.

use ndarray::Array1;

use crate::stats::masked::MaskedVec;

/// Fractional digits printed at most for array elements.
pub const PRECISION: usize = 8;

const MASKED_PRINT: &str = "--";

/// Renders `array([...])` the way numpy prints a float64 vector.
pub fn array_repr(values: &Array1<f64>) -> String {
    format!("array([{}])", format_float_elements(&values.to_vec()))
}

/// Renders `masked_array(data=..., mask=..., fill_value=...)` with the keyword
/// lines aligned on their `=`.
pub fn masked_array_repr(values: &MaskedVec) -> String {
    let data = if values.any_masked() {
        // Elements print individually once any entry is masked
        let parts: Vec<String> = values
            .data()
            .iter()
            .zip(values.mask().iter())
            .map(|(v, m)| {
                if *m {
                    MASKED_PRINT.to_string()
                } else {
                    float_repr(*v)
                }
            })
            .collect();
        format!("[{}]", parts.join(", "))
    } else {
        let data: Vec<f64> = values.data().iter().copied().collect();
        format!("[{}]", format_float_elements(&data))
    };
    let mask = if values.any_masked() {
        let parts: Vec<&str> = values
            .mask()
            .iter()
            .map(|m| if *m { " True" } else { "False" })
            .collect();
        format!("[{}]", parts.join(", "))
    } else {
        "False".to_string()
    };
    format!(
        "masked_array(data={},\n{:>17}={},\n{:>17}={})",
        data,
        "mask",
        mask,
        "fill_value",
        float_repr(values.fill_value())
    )
}

/// Formats every element with at most [`PRECISION`] fractional digits,
/// trailing zeros trimmed, then pads so the decimal points line up.
fn format_float_elements(values: &[f64]) -> String {
    let parts: Vec<Option<(String, String)>> = values
        .iter()
        .map(|v| {
            if v.is_finite() {
                Some(split_fixed(*v))
            } else {
                None
            }
        })
        .collect();

    let pad_left = parts
        .iter()
        .flatten()
        .map(|(int, _)| int.len())
        .max()
        .unwrap_or(0);
    let pad_right = parts
        .iter()
        .flatten()
        .map(|(_, frac)| frac.len())
        .max()
        .unwrap_or(0);
    let any_finite = parts.iter().any(|p| p.is_some());

    values
        .iter()
        .zip(parts.iter())
        .map(|(v, part)| match part {
            Some((int, frac)) => format!("{:>pad_left$}.{:<pad_right$}", int, frac),
            None if any_finite => format!("{:>width$}", non_finite(*v), width = pad_left + pad_right + 1),
            None => non_finite(*v).to_string(),
        })
        .collect::<Vec<String>>()
        .join(", ")
}

/// Splits a finite value into its integer and trimmed fractional digits.
fn split_fixed(value: f64) -> (String, String) {
    let fixed = format!("{:.*}", PRECISION, value);
    let (int, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    (int.to_string(), frac.trim_end_matches('0').to_string())
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "nan"
    } else if value > 0.0 {
        "inf"
    } else {
        "-inf"
    }
}

/// Shortest round-trip representation of a scalar, switching to scientific
/// notation for very large or very small magnitudes (`1e+20`, `1.5e-05`).
pub fn float_repr(value: f64) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e16 || (magnitude != 0.0 && magnitude < 1e-4) {
        let sci = format!("{:e}", value);
        let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };
        format!("{}e{}{:0>2}", mantissa, sign, digits)
    } else {
        let plain = value.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{}.0", plain)
        }
    }
}
