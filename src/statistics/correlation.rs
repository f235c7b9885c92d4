use std::fmt;

use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};
use serde::Deserialize;
use thiserror::Error;

/// Which of the two sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    #[error("x has {x_len} samples but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
    #[error("at least 2 samples are required, got {0}")]
    TooFewSamples(usize),
    #[error("{axis} has zero variance, the correlation is undefined")]
    ZeroVariance { axis: Axis },
    #[error("correlation is not a finite number (numerator {numerator}, denominator {denominator})")]
    NonFinite { numerator: f64, denominator: f64 },
    #[error("noise standard deviation must be finite and non-negative, got {0}")]
    InvalidNoise(f64),
}

/// Two equal-length sample sequences, as read from `{"x": [...], "y": [...]}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairedSamples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// The pieces of a Pearson correlation computation.
///
/// `coefficient == numerator / denominator`, and lies in `[-1, 1]` up to
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    /// Sum of the products of deviations from the means.
    pub numerator: f64,
    /// Square root of the product of the two sums of squared deviations.
    pub denominator: f64,
    pub coefficient: f64,
}

fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|v| *v == values[0])
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes Pearson's r between `x` and `y`.
///
/// # Errors
/// - [`CorrelationError::LengthMismatch`] if the sequences differ in length.
/// - [`CorrelationError::TooFewSamples`] if fewer than two pairs are given.
/// - [`CorrelationError::ZeroVariance`] if either sequence is constant.
/// - [`CorrelationError::NonFinite`] if the sums overflow or the input holds NaN or infinity.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<Correlation, CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(CorrelationError::TooFewSamples(x.len()));
    }
    // the computed mean of a constant sequence can be off by an ulp, so test the values
    if is_constant(x) {
        return Err(CorrelationError::ZeroVariance { axis: Axis::X });
    }
    if is_constant(y) {
        return Err(CorrelationError::ZeroVariance { axis: Axis::Y });
    }

    let mean_x = mean(x);
    let mean_y = mean(y);

    let mut numerator = 0.0;
    let mut spread_x = 0.0;
    let mut spread_y = 0.0;
    for (xi, yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        numerator += dx * dy;
        spread_x += dx * dx;
        spread_y += dy * dy;
    }

    if spread_x == 0.0 {
        return Err(CorrelationError::ZeroVariance { axis: Axis::X });
    }
    if spread_y == 0.0 {
        return Err(CorrelationError::ZeroVariance { axis: Axis::Y });
    }

    let denominator = (spread_x * spread_y).sqrt();
    let coefficient = numerator / denominator;
    if !coefficient.is_finite() {
        return Err(CorrelationError::NonFinite {
            numerator,
            denominator,
        });
    }
    Ok(Correlation {
        numerator,
        denominator,
        coefficient,
    })
}

impl PairedSamples {
    pub fn correlation(&self) -> Result<Correlation, CorrelationError> {
        pearson(&self.x, &self.y)
    }
}

/// Generates `n` pairs along `y = slope * x + intercept` with Gaussian noise on `y`.
///
/// `x` runs over `0, 1, ..., n - 1`. The same seed always yields the same samples.
pub fn synthetic_pairs(
    n: usize,
    slope: f64,
    intercept: f64,
    noise_sd: f64,
    seed: u64,
) -> Result<PairedSamples, CorrelationError> {
    if !noise_sd.is_finite() {
        return Err(CorrelationError::InvalidNoise(noise_sd));
    }
    let noise = Normal::new(0.0, noise_sd).map_err(|_| CorrelationError::InvalidNoise(noise_sd))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let y = x
        .iter()
        .map(|xi| slope * xi + intercept + noise.sample(&mut rng))
        .collect();

    Ok(PairedSamples { x, y })
}
