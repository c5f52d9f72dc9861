/// Descriptive statistics over a slice of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    /// Population variance (divides by N). No square root is taken.
    pub variance: f64,
    pub count: usize,
}

/// Sum of `values` after truncating each element toward zero.
///
/// Truncation follows `f64 as i64`: saturating at the `i64` bounds, NaN
/// becomes 0. The running total wraps.
pub fn sum_truncated(values: &[f64]) -> i64 {
    values
        .iter()
        .fold(0i64, |acc, &v| acc.wrapping_add(v as i64))
}

/// Two-pass mean and population variance.
///
/// An empty slice is not guarded: both `mean` and `variance` come out as
/// `0.0 / 0.0`, i.e. NaN, with `count == 0`.
pub fn summarize(values: &[f64]) -> Summary {
    let count = values.len();
    let n = count as f64;

    let mean = values.iter().sum::<f64>() / n;

    let squared: f64 = values
        .iter()
        .map(|&v| {
            let diff = v - mean;
            diff * diff
        })
        .sum();

    Summary {
        mean,
        variance: squared / n,
        count,
    }
}
