/*!
 * Tests for application configuration functionality
 */

use anyhow::Result;
use srt3dass::app_config::{Config, LogLevel};
use srt3dass::errors::AppError;
use crate::common;

/// Test default configuration values
#[test]
fn test_default_config_withNoParameters_shouldHaveCorrectDefaults() {
    let config = Config::default();

    assert_eq!(config.width, 1920);
    assert_eq!(config.height, 1080);
    assert_eq!(config.depth_offset, 15);
    assert_eq!(config.font_size, 50);
    assert_eq!(config.font_name, "Arial");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

/// Test configuration validation
#[test]
fn test_config_validation_withVariousConfigs_shouldValidateCorrectly() {
    let mut config = Config::default();

    config.width = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
    config.width = 1920;

    config.height = 0;
    assert!(config.validate().is_err());
    config.height = 1080;

    config.font_size = 0;
    assert!(config.validate().is_err());
    config.font_size = 50;

    config.font_name = "  ".to_string();
    assert!(config.validate().is_err());
    config.font_name = "Arial".to_string();

    // Depth offsets beyond half the width are allowed
    config.depth_offset = 5000;
    assert!(config.validate().is_ok());
}

/// Test loading a partial JSON file
#[test]
fn test_from_file_withPartialJson_shouldFillDefaults() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(
        temp_dir.path(),
        "conf.json",
        r#"{"width": 3840, "depth_offset": 20, "log_level": "debug"}"#,
    )?;

    let config = Config::from_file(&path)?;

    assert_eq!(config.width, 3840);
    assert_eq!(config.height, 1080);
    assert_eq!(config.depth_offset, 20);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.style_offset(), 1900);

    Ok(())
}

/// Test that an unreadable config file is reported
#[test]
fn test_from_file_withInvalidJson_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "conf.json", "{ width: ")?;

    let error = Config::from_file(&path).unwrap_err();
    assert!(error.to_string().contains("Failed to parse config file"));

    Ok(())
}

/// Test serialization round trip through JSON
#[test]
fn test_config_serialization_shouldUseSnakeCaseKeys() -> Result<()> {
    let json = serde_json::to_string(&Config::default())?;

    assert!(json.contains("\"depth_offset\":15"));
    assert!(json.contains("\"log_level\":\"info\""));

    Ok(())
}

#[test]
fn test_log_level_to_level_filter_shouldMatch() {
    assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::Trace.to_level_filter(), log::LevelFilter::Trace);
}
