pub mod encode;
pub mod log_transform;
pub mod outliers;
pub mod synth;
