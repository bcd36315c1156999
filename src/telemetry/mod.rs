pub mod loader;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use uom::si::f64::Velocity;
use uom::si::velocity::{kilometer_per_hour, meter_per_second};

use crate::PitwallError;

pub use loader::load_telemetry_jsonl;

/// A single row of lap telemetry as exported by the session provider.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySample {
    /// Elapsed time, seconds
    #[serde(rename = "Time")]
    pub time_s: f64,
    /// Cumulative distance traveled, meters
    #[serde(rename = "Distance")]
    pub distance_m: f64,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    /// Speed, km/h
    #[serde(rename = "Speed")]
    pub speed_kph: f64,
}

/// Column-oriented lap telemetry. All columns always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TelemetryTable {
    time: Vec<Duration>,
    distance: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
    speed_kph: Vec<f64>,
}

impl TelemetryTable {
    pub fn from_columns(
        time: Vec<Duration>,
        distance: Vec<f64>,
        x: Vec<f64>,
        y: Vec<f64>,
        speed_kph: Vec<f64>,
    ) -> Result<Self, PitwallError> {
        let expected = time.len();
        for (column, actual) in [
            ("Distance", distance.len()),
            ("X", x.len()),
            ("Y", y.len()),
            ("Speed", speed_kph.len()),
        ] {
            if actual != expected {
                return Err(PitwallError::MismatchedColumns {
                    column: column.to_string(),
                    expected,
                    actual,
                });
            }
        }

        Ok(Self {
            time,
            distance,
            x,
            y,
            speed_kph,
        })
    }

    /// Builds the table from rows, rejecting timestamps that cannot be an elapsed duration.
    pub fn from_samples(samples: &[TelemetrySample]) -> Result<Self, PitwallError> {
        let mut table = Self {
            time: Vec::with_capacity(samples.len()),
            distance: Vec::with_capacity(samples.len()),
            x: Vec::with_capacity(samples.len()),
            y: Vec::with_capacity(samples.len()),
            speed_kph: Vec::with_capacity(samples.len()),
        };

        for (index, sample) in samples.iter().enumerate() {
            let time = Duration::try_from_secs_f64(sample.time_s).map_err(|e| {
                PitwallError::InvalidSample {
                    index,
                    reason: format!("Time {} is not a valid duration: {}", sample.time_s, e),
                }
            })?;
            table.time.push(time);
            table.distance.push(sample.distance_m);
            table.x.push(sample.x);
            table.y.push(sample.y);
            table.speed_kph.push(sample.speed_kph);
        }

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn time(&self) -> &[Duration] {
        &self.time
    }

    pub fn distance(&self) -> &[f64] {
        &self.distance
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn speed_kph(&self) -> &[f64] {
        &self.speed_kph
    }

    /// Speed column converted to m/s
    pub fn speed_mps(&self) -> Vec<f64> {
        self.speed_kph
            .iter()
            .map(|kph| Velocity::new::<kilometer_per_hour>(*kph).get::<meter_per_second>())
            .collect()
    }
}
