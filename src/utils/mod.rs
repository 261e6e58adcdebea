pub mod deviation;
pub mod prop_analysis;
pub mod report;
