use std::path::Path;

use log::info;

use super::{TelemetrySample, TelemetryTable};
use crate::PitwallError;

/// Reads a lap exported as JSON lines, one [`TelemetrySample`] per line.
pub fn load_telemetry_jsonl(source_file: &Path) -> Result<TelemetryTable, PitwallError> {
    if !source_file.exists() {
        return Err(PitwallError::InvalidTelemetryFile {
            path: format!("{:?}", source_file),
        });
    }

    let samples = serde_jsonlines::json_lines(source_file)
        .map_err(|e| PitwallError::TelemetryLoaderError { source: e })?
        .collect::<Result<Vec<TelemetrySample>, std::io::Error>>()
        .map_err(|e| PitwallError::TelemetryLoaderError { source: e })?;

    if samples.is_empty() {
        return Err(PitwallError::EmptyTelemetry);
    }

    let telemetry = TelemetryTable::from_samples(&samples)?;
    info!(
        "Loaded {:?}, found {} telemetry samples",
        source_file,
        telemetry.len()
    );
    Ok(telemetry)
}
