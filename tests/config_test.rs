//! Tests for layered settings

use std::path::PathBuf;

use wbsmap::config::Settings;

#[test]
fn given_no_overrides_when_loading_then_compiled_defaults_apply() {
    let settings = Settings::default();

    assert_eq!(settings.data_path, PathBuf::from("data/outline.json"));
    assert_eq!(settings.output_dir, PathBuf::from("output"));
    assert_eq!(settings.layout.radius_step, 1.6);
    assert_eq!(settings.layout.spread, 1.6);
    assert_eq!(settings.canvas.size_units, 11.0);
    assert_eq!(settings.canvas.margin_units, 2.5);
}

#[test]
fn given_env_overrides_when_loading_then_they_replace_defaults() {
    // Arrange: env vars are process-global, so this test owns them alone
    std::env::set_var("WBSMAP_LAYOUT__RADIUS_STEP", "2.0");
    std::env::set_var("WBSMAP_OUTPUT_DIR", "artifacts");

    // Act
    let settings = Settings::load().unwrap();

    // Assert
    assert_eq!(settings.layout.radius_step, 2.0);
    assert_eq!(settings.output_dir, PathBuf::from("artifacts"));
    assert_eq!(settings.layout.spread, 1.6);

    std::env::remove_var("WBSMAP_LAYOUT__RADIUS_STEP");
    std::env::remove_var("WBSMAP_OUTPUT_DIR");
}
