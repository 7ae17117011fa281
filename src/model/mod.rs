pub mod labels;
pub mod thresholds;
