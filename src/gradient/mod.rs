pub mod color_gradient;
pub mod error;
pub mod thresholds;
