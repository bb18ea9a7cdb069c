// Module exports for models

pub mod date_range;
pub mod holiday;
pub mod metrics;
pub mod settings;
