mod common;

use std::sync::Mutex;

use autolevels_core::error::AutolevelsError;
use autolevels_core::filters::histogram::ClipPoints;
use autolevels_core::io::image_io::load_color_image;
use autolevels_core::pipeline::config::{CompareConfig, CorrectionConfig};
use autolevels_core::pipeline::{
    run_correction, run_correction_reported, CorrectionStage, ProgressReporter,
};

use common::{gray_color_frame, make_span, write_test_png};

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<CorrectionStage>>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: CorrectionStage) {
        self.stages.lock().unwrap().push(stage);
    }
}

// ---------------------------------------------------------------------------
// CorrectionConfig
// ---------------------------------------------------------------------------

#[test]
fn test_config_defaults_fill_missing_fields() {
    let json = r#"{ "input": "a.png", "output": "b.png" }"#;
    let config: CorrectionConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.threshold_percent, 1.0);
    assert!(config.compare.is_none());

    let json = r#"{ "input": "a.png", "output": "b.png", "compare": { "output": "c.png" } }"#;
    let config: CorrectionConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.compare.unwrap().scale_percent, 100.0);
}

#[test]
fn test_stage_display() {
    assert_eq!(CorrectionStage::Loading.to_string(), "Loading image");
    assert_eq!(CorrectionStage::Comparing.to_string(), "Writing comparison");
}

// ---------------------------------------------------------------------------
// run_correction
// ---------------------------------------------------------------------------

#[test]
fn test_run_writes_output_and_comparison() {
    let dir = tempfile::tempdir().unwrap();
    let image = gray_color_frame(make_span(50, 200));
    let input = write_test_png(dir.path(), "in.png", &image);

    let config = CorrectionConfig {
        input,
        output: dir.path().join("out.png"),
        threshold_percent: 0.0,
        compare: Some(CompareConfig {
            output: dir.path().join("compare.png"),
            scale_percent: 100.0,
        }),
    };
    let reporter = RecordingReporter::default();
    let correction = run_correction_reported(&config, &reporter).unwrap();

    assert_eq!(correction.channels[0].clip_points, ClipPoints { black: 50, white: 200 });
    assert_eq!(load_color_image(&config.output).unwrap(), correction.corrected);

    let compare = load_color_image(&dir.path().join("compare.png")).unwrap();
    assert_eq!(compare.width(), 302);
    assert_eq!(compare.height(), 1);

    assert_eq!(
        *reporter.stages.lock().unwrap(),
        vec![
            CorrectionStage::Loading,
            CorrectionStage::Correcting,
            CorrectionStage::Writing,
            CorrectionStage::Comparing,
        ]
    );
}

#[test]
fn test_invalid_threshold_rejected_before_loading() {
    let dir = tempfile::tempdir().unwrap();
    let config = CorrectionConfig {
        input: dir.path().join("does-not-exist.png"),
        output: dir.path().join("out.png"),
        threshold_percent: 150.0,
        compare: None,
    };
    assert!(matches!(
        run_correction(&config),
        Err(AutolevelsError::InvalidThreshold(_))
    ));
}

#[test]
fn test_unreadable_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = CorrectionConfig {
        input: dir.path().join("does-not-exist.png"),
        output: dir.path().join("out.png"),
        ..CorrectionConfig::default()
    };
    assert!(matches!(
        run_correction(&config),
        Err(AutolevelsError::ImageLoad { .. })
    ));
    assert!(!config.output.exists());
}
