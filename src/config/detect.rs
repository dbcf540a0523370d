use crate::detector::DetectionConfig;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// JSON configuration for the `detect_regions` tool.
#[derive(Debug, Deserialize)]
pub struct DetectToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detection: DetectionConfig,
    pub output: DetectOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DetectOutputConfig {
    /// Where the JSON detection report is written.
    pub regions_json: PathBuf,
    /// Optional PNG with region outlines drawn over the input.
    #[serde(default)]
    pub overlay_image: Option<PathBuf>,
}

pub fn parse_config(json: &str) -> Result<DetectToolConfig> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_config(path: &Path) -> Result<DetectToolConfig> {
    let data = fs::read_to_string(path)?;
    parse_config(&data)
}
