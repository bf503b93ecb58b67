pub mod chart;
pub mod config;
pub mod efficiency;
pub mod markers;
pub mod ui;
