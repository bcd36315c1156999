use std::f64::consts::{PI, TAU};

use super::derivative::{Abscissa, DerivativeMethod, derivative};
use crate::PitwallError;

/// An angle folded into `(-π, π]` together with the whole turns removed from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WrappedAngle {
    /// Radians, within `(-π, π]`
    pub angle: f64,
    /// Full 2π revolutions folded away, `input = angle + 2π * revolutions`
    pub revolutions: i64,
}

/// Folds any angle in radians into `(-π, π]`.
///
/// Non-finite input is returned unchanged with no revolutions.
pub fn wrap_to_pi(angle: f64) -> WrappedAngle {
    if !angle.is_finite() {
        return WrappedAngle {
            angle,
            revolutions: 0,
        };
    }

    let mut revolutions = ((angle - PI) / TAU).ceil();
    let mut wrapped = angle - revolutions * TAU;
    // rounding in the subtraction can land a hair outside the range
    if wrapped > PI {
        wrapped -= TAU;
        revolutions += 1.;
    } else if wrapped <= -PI {
        wrapped += TAU;
        revolutions -= 1.;
    }

    WrappedAngle {
        angle: wrapped,
        revolutions: revolutions as i64,
    }
}

/// Builds a continuous heading from the direction of travel `(dx, dy)`.
///
/// Each step adds the shortest signed turn from the previous heading, so the
/// output never jumps by 2π when `atan2` wraps. It may grow past ±π as laps
/// accumulate revolutions.
pub fn continuous_heading(dx: &[f64], dy: &[f64]) -> Result<Vec<f64>, PitwallError> {
    if dx.len() != dy.len() {
        return Err(PitwallError::MismatchedLengths {
            expected: dx.len(),
            actual: dy.len(),
        });
    }

    let mut theta: Vec<f64> = Vec::with_capacity(dx.len());
    for (x, y) in dx.iter().zip(dy.iter()) {
        let raw = y.atan2(*x);
        let next = match theta.last() {
            Some(prev) => prev + wrap_to_pi(raw - prev).angle,
            None => raw,
        };
        theta.push(next);
    }
    Ok(theta)
}

/// Rate of heading change per unit distance.
pub fn curvature(
    distance: &[f64],
    theta: &[f64],
    method: DerivativeMethod,
) -> Result<Vec<f64>, PitwallError> {
    derivative(Abscissa::Scalar(distance), theta, method)
}
