// Library interface for pitwall
// This allows integration tests and benches to access internal modules

pub mod analysis;
pub mod config;
pub mod errors;
pub mod telemetry;
pub mod writer;

// Re-export commonly used types
pub use analysis::{
    AccelerationConfig, AccelerationSummary, Accelerations, DerivativeMethod,
    compute_accelerations, compute_accelerations_with,
};
pub use config::AnalysisConfig;
pub use errors::PitwallError;
pub use telemetry::{TelemetrySample, TelemetryTable};
