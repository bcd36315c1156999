/// Accelerations above this magnitude (in g) are treated as differentiation spikes
pub const ACCELERATION_THRESHOLD_G: f64 = 7.5;

/// Replaces every value whose magnitude exceeds `threshold` with its predecessor.
///
/// Runs left to right, so a run of spikes collapses onto the last good value
/// before it. A spike at the very start has no predecessor and becomes 0.
pub fn clamp_outliers(values: &mut [f64], threshold: f64) {
    let Some(first) = values.first_mut() else {
        return;
    };
    if first.abs() > threshold {
        *first = 0.;
    }

    for i in 1..values.len() {
        if values[i].abs() > threshold {
            values[i] = values[i - 1];
        }
    }
}

/// Owned variant of [`clamp_outliers`].
pub fn remove_outliers(mut values: Vec<f64>, threshold: f64) -> Vec<f64> {
    clamp_outliers(&mut values, threshold);
    values
}
