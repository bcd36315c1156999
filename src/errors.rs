// Error types for pitwall

use snafu::Snafu;
use std::io;

#[derive(Debug, Snafu)]
pub enum PitwallError {
    // Errors from the numerical pipeline
    #[snafu(display("Not enough samples: need at least {required}, got {actual}"))]
    InsufficientSamples { required: usize, actual: usize },
    #[snafu(display("Sequence length mismatch: expected {expected}, got {actual}"))]
    MismatchedLengths { expected: usize, actual: usize },

    // Telemetry table errors
    #[snafu(display("Telemetry column {column} has {actual} rows, expected {expected}"))]
    MismatchedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[snafu(display("Invalid telemetry sample at row {index}: {reason}"))]
    InvalidSample { index: usize, reason: String },
    #[snafu(display("Telemetry file contains no samples"))]
    EmptyTelemetry,

    // Errors for the telemetry loader
    #[snafu(display("Invalid telemetry file: {path}"))]
    InvalidTelemetryFile { path: String },
    #[snafu(display("Error loading telemetry file"))]
    TelemetryLoaderError { source: io::Error },

    // Errors for the acceleration writer
    #[snafu(display("Error writing acceleration file"))]
    WriterError { source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
}
