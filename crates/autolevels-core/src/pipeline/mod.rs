pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{run_correction, run_correction_reported};
pub use types::{CorrectionStage, NoOpReporter, ProgressReporter};
