pub mod checkin;
pub mod config;
pub mod dashboard;
pub mod heatmap;
pub mod meter;
pub mod streak;
