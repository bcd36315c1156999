pub mod acceleration;
pub mod derivative;
pub mod heading;
pub mod outliers;

pub use acceleration::{
    AccelerationConfig, AccelerationSample, AccelerationSummary, Accelerations,
    PeakAcceleration, compute_accelerations, compute_accelerations_with,
};
pub use derivative::{Abscissa, DerivativeMethod, derivative, smooth_derivative};
pub use heading::{WrappedAngle, continuous_heading, curvature, wrap_to_pi};
pub use outliers::{clamp_outliers, remove_outliers};
