use tracing::info;

use crate::color::correct::{correct, Correction};
use crate::error::{AutolevelsError, Result};
use crate::filters::histogram::SaturationThreshold;
use crate::io::compare::side_by_side;
use crate::io::image_io::{load_color_image, save_color_image};

use super::config::CorrectionConfig;
use super::types::{CorrectionStage, NoOpReporter, ProgressReporter};

/// Run a correction described by `config` without progress reporting.
pub fn run_correction(config: &CorrectionConfig) -> Result<Correction> {
    run_correction_reported(config, &NoOpReporter)
}

/// Load, correct, and save an image, reporting each stage.
///
/// Parameters are validated before the input is opened. The output is only
/// written once all three channels have been corrected.
pub fn run_correction_reported(
    config: &CorrectionConfig,
    reporter: &dyn ProgressReporter,
) -> Result<Correction> {
    let threshold = SaturationThreshold::new(config.threshold_percent)?;
    if let Some(ref compare) = config.compare {
        if !compare.scale_percent.is_finite() || compare.scale_percent <= 0.0 {
            return Err(AutolevelsError::InvalidScale(compare.scale_percent));
        }
    }

    reporter.begin_stage(CorrectionStage::Loading);
    let image = load_color_image(&config.input)?;
    info!(
        input = %config.input.display(),
        width = image.width(),
        height = image.height(),
        "Image loaded"
    );
    reporter.finish_stage();

    reporter.begin_stage(CorrectionStage::Correcting);
    let correction = correct(&image, threshold.percent())?;
    reporter.finish_stage();

    reporter.begin_stage(CorrectionStage::Writing);
    save_color_image(&correction.corrected, &config.output)?;
    info!(output = %config.output.display(), "Corrected image saved");
    reporter.finish_stage();

    if let Some(ref compare) = config.compare {
        reporter.begin_stage(CorrectionStage::Comparing);
        let combined = side_by_side(
            &correction.original,
            &correction.corrected,
            compare.scale_percent,
        )?;
        save_color_image(&combined, &compare.output)?;
        info!(
            output = %compare.output.display(),
            scale = compare.scale_percent,
            "Comparison saved"
        );
        reporter.finish_stage();
    }

    Ok(correction)
}
