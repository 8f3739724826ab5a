/// Step of a correction run, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CorrectionStage {
    Loading,
    Correcting,
    Writing,
    Comparing,
}

impl CorrectionStage {
    /// Number of stages a run with a comparison goes through.
    pub const COUNT: usize = 4;
}

impl std::fmt::Display for CorrectionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading image"),
            Self::Correcting => write!(f, "Correcting channels"),
            Self::Writing => write!(f, "Writing output"),
            Self::Comparing => write!(f, "Writing comparison"),
        }
    }
}

/// Thread-safe progress reporting for a correction run.
///
/// Implementors can use this to drive progress bars or logging.
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started.
    fn begin_stage(&self, _stage: CorrectionStage) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_correction` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
