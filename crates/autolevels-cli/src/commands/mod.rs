pub mod analyze;
pub mod config;
pub mod correct;
pub mod curve;
