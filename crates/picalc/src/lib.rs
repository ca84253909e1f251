//! PiCalc-rs library: application logic for the π calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
