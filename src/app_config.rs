use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the rendering parameters of the generated script:
/// resolution, stereoscopic depth and font settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Horizontal play resolution of the video
    #[serde(default = "default_width")]
    pub width: u32,

    /// Vertical play resolution of the video
    #[serde(default = "default_height")]
    pub height: u32,

    /// Horizontal shift between the two eyes' copies, in pixels
    #[serde(default = "default_depth_offset")]
    pub depth_offset: u32,

    /// Font size used by both styles
    #[serde(default = "default_font_size")]
    pub font_size: u32,

    /// Font face used by both styles
    #[serde(default = "default_font_name")]
    pub font_name: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching filter for the log facade
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

fn default_depth_offset() -> u32 {
    15
}

fn default_font_size() -> u32 {
    50
}

fn default_font_name() -> String {
    "Arial".to_string()
}

impl Config {
    /// Load a configuration from a JSON file, missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.width == 0 || self.height == 0 {
            return Err(AppError::Config(format!(
                "Resolution must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.font_size == 0 {
            return Err(AppError::Config("Font size must be positive".to_string()));
        }

        if self.font_name.trim().is_empty() {
            return Err(AppError::Config("Font name must not be empty".to_string()));
        }

        Ok(())
    }

    /// Margin pushing each eye's copy away from the centre line.
    ///
    /// Computed as `floor(width / 2) - depth_offset`; negative when the depth
    /// offset exceeds half the width.
    pub fn style_offset(&self) -> i64 {
        i64::from(self.width / 2) - i64::from(self.depth_offset)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            width: default_width(),
            height: default_height(),
            depth_offset: default_depth_offset(),
            font_size: default_font_size(),
            font_name: default_font_name(),
            log_level: LogLevel::default(),
        }
    }
}
