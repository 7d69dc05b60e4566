// Numeric primitives shared by the scorers
//
// Empty input gives NaN rather than an error, so a missing period or an
// empty table flows through the arithmetic instead of stopping it.

use statrs::distribution::{ContinuousCDF, Normal};

/// Inverse CDF of the standard normal distribution (probit)
///
/// `probit(0.975)` is the familiar 1.959964 two-sided 95% z-score.
/// Returns NaN for `p` outside `[0, 1]`.
pub fn probit(p: f64) -> f64 {
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }

    match Normal::new(0.0, 1.0) {
        Ok(standard) => standard.inverse_cdf(p),
        Err(_) => f64::NAN,
    }
}

/// Two-sided z-score for a confidence level, e.g. 0.95 -> 1.96
pub fn z_score(confidence: f64) -> f64 {
    probit(1.0 - (1.0 - confidence) / 2.0)
}

/// Quantile with linear interpolation between the two nearest ranks
///
/// Position is `(n - 1) * q` over the sorted values. NaN for empty input.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let pos = (sorted.len() - 1) as f64 * q;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Several quantiles of the same data
pub fn quantiles(values: &[f64], qs: &[f64]) -> Vec<f64> {
    qs.iter().map(|&q| quantile(values, q)).collect()
}

/// Arithmetic mean, NaN for empty input
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
