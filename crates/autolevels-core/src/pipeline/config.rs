use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCALE_PERCENT, DEFAULT_THRESHOLD_PERCENT};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrectionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Percentage of pixels per channel allowed to clip at each extreme.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: f64,
    /// Also write original and corrected side by side.
    #[serde(default)]
    pub compare: Option<CompareConfig>,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.png"),
            output: PathBuf::from("corrected.png"),
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            compare: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    pub output: PathBuf,
    #[serde(default = "default_scale_percent")]
    pub scale_percent: f64,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("compare.png"),
            scale_percent: DEFAULT_SCALE_PERCENT,
        }
    }
}

fn default_threshold_percent() -> f64 {
    DEFAULT_THRESHOLD_PERCENT
}

fn default_scale_percent() -> f64 {
    DEFAULT_SCALE_PERCENT
}
