// Smooth low-noise differentiation of sampled telemetry signals.
//
// Interior points use a 7-point stencil from the Holoborodko family of
// smooth noise-robust differentiators. The first and last three points fall
// back to one-sided or skip-one differences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::PitwallError;

/// Smallest input the 7-point stencil can be evaluated on.
pub const MIN_SAMPLES: usize = 7;

const SMOOTH_COEFFICIENTS: [f64; 3] = [5. / 32., 4. / 32., 1. / 32.];

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DerivativeMethod {
    /// Conservative smoothing stencil, suppresses most of the sampling noise
    #[default]
    Smooth,
    /// Plain centered difference on interior points. More aggressive and noisier.
    Centered,
}

/// The independent variable of a signal.
///
/// Telemetry carries elapsed time as durations and distance as plain meters,
/// both are normalized to `f64` before any arithmetic.
#[derive(Clone, Copy, Debug)]
pub enum Abscissa<'a> {
    Scalar(&'a [f64]),
    Elapsed(&'a [Duration]),
}

impl Abscissa<'_> {
    pub fn len(&self) -> usize {
        match self {
            Abscissa::Scalar(values) => values.len(),
            Abscissa::Elapsed(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Owned copy of the parameter as seconds (or as-is for scalars)
    pub fn to_seconds(&self) -> Vec<f64> {
        match self {
            Abscissa::Scalar(values) => values.to_vec(),
            Abscissa::Elapsed(values) => values.iter().map(Duration::as_secs_f64).collect(),
        }
    }
}

impl<'a> From<&'a [f64]> for Abscissa<'a> {
    fn from(value: &'a [f64]) -> Self {
        Abscissa::Scalar(value)
    }
}

impl<'a> From<&'a [Duration]> for Abscissa<'a> {
    fn from(value: &'a [Duration]) -> Self {
        Abscissa::Elapsed(value)
    }
}

/// Finite difference between two samples, zero when the parameter does not move.
#[inline]
fn slope(v_from: f64, v_to: f64, t_from: f64, t_to: f64) -> f64 {
    let dt = t_to - t_from;
    if dt == 0. { 0. } else { (v_to - v_from) / dt }
}

/// Estimates dv/dt at every sample of `values` with respect to `parameter`.
///
/// The output has the same length as the input. Duplicate parameter values
/// (stationary timestamps) contribute nothing to a term instead of producing
/// NaN or infinity.
pub fn derivative(
    parameter: Abscissa<'_>,
    values: &[f64],
    method: DerivativeMethod,
) -> Result<Vec<f64>, PitwallError> {
    if parameter.len() != values.len() {
        return Err(PitwallError::MismatchedLengths {
            expected: parameter.len(),
            actual: values.len(),
        });
    }
    let n = values.len();
    if n < MIN_SAMPLES {
        return Err(PitwallError::InsufficientSamples {
            required: MIN_SAMPLES,
            actual: n,
        });
    }

    let t = parameter.to_seconds();
    let v = values;
    let mut dvdt = vec![0.; n];

    dvdt[0] = slope(v[0], v[1], t[0], t[1]);
    dvdt[1] = slope(v[0], v[2], t[0], t[2]);
    dvdt[2] = slope(v[1], v[3], t[1], t[3]);

    dvdt[n - 1] = slope(v[n - 2], v[n - 1], t[n - 2], t[n - 1]);
    dvdt[n - 2] = slope(v[n - 3], v[n - 1], t[n - 3], t[n - 1]);
    dvdt[n - 3] = slope(v[n - 4], v[n - 2], t[n - 4], t[n - 2]);

    for i in 3..n - 3 {
        dvdt[i] = match method {
            DerivativeMethod::Smooth => SMOOTH_COEFFICIENTS
                .iter()
                .enumerate()
                .map(|(k, c)| {
                    let j = k + 1;
                    2. * j as f64 * c * slope(v[i - j], v[i + j], t[i - j], t[i + j])
                })
                .sum(),
            DerivativeMethod::Centered => slope(v[i - 1], v[i + 1], t[i - 1], t[i + 1]),
        };
    }

    Ok(dvdt)
}

/// Shorthand for the smoothing stencil over a plain numeric parameter.
pub fn smooth_derivative(parameter: &[f64], values: &[f64]) -> Result<Vec<f64>, PitwallError> {
    derivative(Abscissa::Scalar(parameter), values, DerivativeMethod::Smooth)
}
