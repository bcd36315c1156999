use itertools::{Itertools, izip};
use log::debug;
use serde::{Deserialize, Serialize};

use super::derivative::{Abscissa, DerivativeMethod, derivative};
use super::heading::{continuous_heading, curvature};
use super::outliers::{ACCELERATION_THRESHOLD_G, remove_outliers};
use crate::PitwallError;
use crate::telemetry::TelemetryTable;

pub const STANDARD_GRAVITY_MPS2: f64 = 9.81;
const DEFAULT_DECIMALS: u8 = 2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AccelerationConfig {
    pub method: DerivativeMethod,
    /// Magnitudes above this, in g, are replaced by the previous sample
    pub outlier_threshold_g: f64,
    pub gravity_mps2: f64,
    /// Decimal places kept before outlier clamping
    pub decimals: u8,
}

impl Default for AccelerationConfig {
    fn default() -> Self {
        Self {
            method: DerivativeMethod::default(),
            outlier_threshold_g: ACCELERATION_THRESHOLD_G,
            gravity_mps2: STANDARD_GRAVITY_MPS2,
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Longitudinal and lateral acceleration traces for a lap, in g.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Accelerations {
    pub longitudinal_g: Vec<f64>,
    pub lateral_g: Vec<f64>,
}

/// One output row, keyed by distance so traces from different laps line up
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccelerationSample {
    pub distance_m: f64,
    pub longitudinal_g: f64,
    pub lateral_g: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeakAcceleration {
    pub g: f64,
    pub distance_m: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccelerationSummary {
    /// Most negative longitudinal value
    pub peak_braking: PeakAcceleration,
    /// Most positive longitudinal value
    pub peak_traction: PeakAcceleration,
    /// Largest lateral magnitude, sign preserved
    pub peak_lateral: PeakAcceleration,
}

impl Accelerations {
    pub fn len(&self) -> usize {
        self.longitudinal_g.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longitudinal_g.is_empty()
    }

    pub fn samples(&self, distance: &[f64]) -> Vec<AccelerationSample> {
        izip!(distance, &self.longitudinal_g, &self.lateral_g)
            .map(|(distance_m, longitudinal_g, lateral_g)| AccelerationSample {
                distance_m: *distance_m,
                longitudinal_g: *longitudinal_g,
                lateral_g: *lateral_g,
            })
            .collect()
    }

    /// Peak values of the lap, `None` if the traces are empty or `distance` is too short
    pub fn summarize(&self, distance: &[f64]) -> Option<AccelerationSummary> {
        let (braking_idx, traction_idx) = self
            .longitudinal_g
            .iter()
            .position_minmax_by(|a, b| a.total_cmp(b))
            .into_option()?;
        let lateral_idx = self
            .lateral_g
            .iter()
            .position_max_by(|a, b| a.abs().total_cmp(&b.abs()))?;

        let peak = |values: &[f64], idx: usize| -> Option<PeakAcceleration> {
            Some(PeakAcceleration {
                g: *values.get(idx)?,
                distance_m: *distance.get(idx)?,
            })
        };

        Some(AccelerationSummary {
            peak_braking: peak(&self.longitudinal_g, braking_idx)?,
            peak_traction: peak(&self.longitudinal_g, traction_idx)?,
            peak_lateral: peak(&self.lateral_g, lateral_idx)?,
        })
    }
}

/// Rounds half to even, the way numpy-based session tooling reports values
fn round_to(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(i32::from(decimals));
    (value * scale).round_ties_even() / scale
}

pub fn compute_accelerations(telemetry: &TelemetryTable) -> Result<Accelerations, PitwallError> {
    compute_accelerations_with(telemetry, &AccelerationConfig::default())
}

/// Derives longitudinal (dv/dt) and lateral (v² · κ) acceleration from a lap.
///
/// Values are rounded before the outlier pass, so the threshold applies to
/// what the caller will actually see.
pub fn compute_accelerations_with(
    telemetry: &TelemetryTable,
    config: &AccelerationConfig,
) -> Result<Accelerations, PitwallError> {
    debug!(
        "Computing accelerations over {} samples using {:?} differentiation",
        telemetry.len(),
        config.method
    );
    let speed = telemetry.speed_mps();

    let dvdt = derivative(Abscissa::Elapsed(telemetry.time()), &speed, config.method)?;
    let longitudinal = dvdt
        .iter()
        .map(|a| round_to(a / config.gravity_mps2, config.decimals))
        .collect();

    let distance = Abscissa::Scalar(telemetry.distance());
    let dx = derivative(distance, telemetry.x(), config.method)?;
    let dy = derivative(distance, telemetry.y(), config.method)?;
    let theta = continuous_heading(&dx, &dy)?;
    let kappa = curvature(telemetry.distance(), &theta, config.method)?;
    let lateral = speed
        .iter()
        .zip(kappa.iter())
        .map(|(v, k)| round_to(v * v * k / config.gravity_mps2, config.decimals))
        .collect();

    Ok(Accelerations {
        longitudinal_g: remove_outliers(longitudinal, config.outlier_threshold_g),
        lateral_g: remove_outliers(lateral, config.outlier_threshold_g),
    })
}
