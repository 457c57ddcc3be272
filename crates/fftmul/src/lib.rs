//! FFTMul library — application logic for the multiplier CLI.

pub mod app;
pub mod config;
pub mod errors;
