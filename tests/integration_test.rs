// Integration tests for the acceleration pipeline with synthetic laps
//
// Each test builds a lap with a known analytic answer, runs it through the
// loader and the acceleration composer, and checks the derived g traces.

use std::io::Write;

use approx::assert_abs_diff_eq;
use pitwall::{
    PitwallError, TelemetrySample, TelemetryTable, compute_accelerations,
    telemetry::load_telemetry_jsonl, writer::write_accelerations,
};
use tempfile::NamedTempFile;

/// Writes samples to a temporary JSON lines file the way the exporter does
fn write_lap(samples: &[TelemetrySample]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for sample in samples {
        writeln!(file, "{}", serde_json::to_string(sample).unwrap()).unwrap();
    }
    file.flush().unwrap();
    file
}

/// Left-hand circle of `radius` meters at constant speed, sampled every `step_m`
fn constant_radius_lap(
    n: usize,
    radius: f64,
    speed_kph: f64,
    step_m: f64,
) -> Vec<TelemetrySample> {
    let speed_mps = speed_kph / 3.6;
    (0..n)
        .map(|i| {
            let s = i as f64 * step_m;
            TelemetrySample {
                time_s: s / speed_mps,
                distance_m: s,
                x: radius * (s / radius).sin(),
                y: radius * (1. - (s / radius).cos()),
                speed_kph,
            }
        })
        .collect()
}

/// Straight run along +X with constant acceleration `accel_mps2`
fn accelerating_lap(n: usize, initial_kph: f64, accel_mps2: f64) -> Vec<TelemetrySample> {
    let v0 = initial_kph / 3.6;
    (0..n)
        .map(|i| {
            let t = i as f64 * 0.1;
            let s = v0 * t + 0.5 * accel_mps2 * t * t;
            TelemetrySample {
                time_s: t,
                distance_m: s,
                x: s,
                y: 12.,
                speed_kph: (v0 + accel_mps2 * t) * 3.6,
            }
        })
        .collect()
}

#[test]
fn test_straight_line_from_file_has_zero_acceleration() {
    let samples: Vec<TelemetrySample> = (0..60)
        .map(|i| TelemetrySample {
            time_s: i as f64 * 0.05,
            distance_m: i as f64 * 2.5,
            x: -300. + i as f64 * 2.5,
            y: 40.,
            speed_kph: 180.,
        })
        .collect();
    let file = write_lap(&samples);

    let telemetry = load_telemetry_jsonl(file.path()).unwrap();
    let accelerations = compute_accelerations(&telemetry).unwrap();

    assert_eq!(accelerations.longitudinal_g.len(), samples.len());
    assert_eq!(accelerations.lateral_g.len(), samples.len());
    for g in accelerations
        .longitudinal_g
        .iter()
        .chain(accelerations.lateral_g.iter())
    {
        assert_abs_diff_eq!(*g, 0., epsilon = 1e-9);
    }
}

#[test]
fn test_constant_radius_corner_gives_centripetal_acceleration() {
    // 20 m/s around a 100m radius: v^2 / r = 4 m/s^2, 0.41g after rounding
    let samples = constant_radius_lap(80, 100., 72., 2.);
    let telemetry = TelemetryTable::from_samples(&samples).unwrap();

    let accelerations = compute_accelerations(&telemetry).unwrap();

    // away from the reduced-order ends the heading and curvature stencils are both full width
    for i in 6..samples.len() - 6 {
        assert_abs_diff_eq!(accelerations.lateral_g[i], 0.41, epsilon = 1e-9);
        assert_abs_diff_eq!(accelerations.longitudinal_g[i], 0., epsilon = 1e-9);
    }
}

#[test]
fn test_heading_survives_a_full_lap() {
    // more than a full turn, so the raw heading wraps past ±π twice
    let radius = 30.;
    let samples = constant_radius_lap(120, radius, 54., 2.);
    let telemetry = TelemetryTable::from_samples(&samples).unwrap();

    let accelerations = compute_accelerations(&telemetry).unwrap();

    // 15 m/s on 30m radius: 7.5 m/s^2, 0.76g
    for i in 6..samples.len() - 6 {
        assert_abs_diff_eq!(accelerations.lateral_g[i], 0.76, epsilon = 1e-9);
    }
}

#[test]
fn test_constant_acceleration_is_recovered() {
    // half a g of acceleration
    let samples = accelerating_lap(40, 80., 4.905);
    let telemetry = TelemetryTable::from_samples(&samples).unwrap();

    let accelerations = compute_accelerations(&telemetry).unwrap();

    for (lon, lat) in accelerations
        .longitudinal_g
        .iter()
        .zip(accelerations.lateral_g.iter())
    {
        assert_abs_diff_eq!(*lon, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(*lat, 0., epsilon = 1e-9);
    }
}

#[test]
fn test_computation_is_deterministic_and_pure() {
    let samples = constant_radius_lap(50, 60., 90., 3.);
    let telemetry = TelemetryTable::from_samples(&samples).unwrap();
    let before = telemetry.clone();

    let first = compute_accelerations(&telemetry).unwrap();
    let second = compute_accelerations(&telemetry).unwrap();

    assert_eq!(first, second);
    assert_eq!(telemetry, before);
}

#[test]
fn test_lap_too_short_for_stencil() {
    let samples = accelerating_lap(5, 100., 1.);
    let file = write_lap(&samples);

    let telemetry = load_telemetry_jsonl(file.path()).unwrap();

    match compute_accelerations(&telemetry) {
        Err(PitwallError::InsufficientSamples { required, actual }) => {
            assert_eq!(required, 7);
            assert_eq!(actual, 5);
        }
        other => panic!("Expected InsufficientSamples, got {:?}", other),
    }
}

#[test]
fn test_trace_written_and_summarized() {
    let samples = accelerating_lap(30, 150., -9.81);
    let telemetry = TelemetryTable::from_samples(&samples).unwrap();
    let accelerations = compute_accelerations(&telemetry).unwrap();
    let output_dir = tempfile::tempdir().unwrap();
    let output = output_dir.path().join("trace.jsonl");

    write_accelerations(&output, &accelerations.samples(telemetry.distance())).unwrap();

    let lines = std::fs::read_to_string(&output).unwrap();
    assert_eq!(lines.lines().count(), samples.len());

    let summary = accelerations.summarize(telemetry.distance()).unwrap();
    assert_abs_diff_eq!(summary.peak_braking.g, -1., epsilon = 1e-9);
    assert_abs_diff_eq!(summary.peak_lateral.g, 0., epsilon = 1e-9);
}
