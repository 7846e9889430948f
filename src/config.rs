//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/wbsmap/wbsmap.toml`
//! 3. Environment variables: `WBSMAP_*` prefix (`__` separates nesting,
//!    e.g. `WBSMAP_LAYOUT__RADIUS_STEP`)

use std::path::{Path, PathBuf};

use config::{Config, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::errors::{OutlineError, OutlineResult};

/// Radial layout spacing constants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Radial distance per depth level, in plan units
    pub radius_step: f64,
    /// Base angular window for fan-out, in radians
    pub spread: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            radius_step: 1.6,
            spread: 1.6,
        }
    }
}

/// Mind-map canvas geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasSettings {
    /// Side length of the square canvas, in plan units
    pub size_units: f64,
    /// Margin added around the node bounding box so labels stay on canvas
    pub margin_units: f64,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            size_units: 11.0,
            margin_units: 2.5,
        }
    }
}

/// Unified configuration for wbsmap.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Outline document location (default: data/outline.json)
    pub data_path: PathBuf,
    /// Directory for exported artifacts (default: output)
    pub output_dir: PathBuf,
    /// Layout spacing
    pub layout: LayoutSettings,
    /// Canvas geometry
    pub canvas: CanvasSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/outline.json"),
            output_dir: PathBuf::from("output"),
            layout: LayoutSettings::default(),
            canvas: CanvasSettings::default(),
        }
    }
}

/// Raw layout settings for intermediate parsing (fields are Option to
/// distinguish "not specified" from an explicit value).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLayoutSettings {
    pub radius_step: Option<f64>,
    pub spread: Option<f64>,
}

/// Raw canvas settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCanvasSettings {
    pub size_units: Option<f64>,
    pub margin_units: Option<f64>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub layout: RawLayoutSettings,
    #[serde(default)]
    pub canvas: RawCanvasSettings,
}

/// Get the XDG config directory for wbsmap.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wbsmap").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("wbsmap.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> OutlineResult<RawSettings> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| OutlineError::Config(format!("read {}: {}", path.display(), e)))?;
    toml::from_str(&content)
        .map_err(|e| OutlineError::Config(format!("parse {}: {}", path.display(), e)))
}

fn config_err(e: config::ConfigError) -> OutlineError {
    OutlineError::Config(e.to_string())
}

impl Settings {
    /// Merge overlay config onto self (base): overlay wins if Some,
    /// otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_path: overlay
                .data_path
                .clone()
                .unwrap_or_else(|| self.data_path.clone()),
            output_dir: overlay
                .output_dir
                .clone()
                .unwrap_or_else(|| self.output_dir.clone()),
            layout: LayoutSettings {
                radius_step: overlay
                    .layout
                    .radius_step
                    .unwrap_or(self.layout.radius_step),
                spread: overlay.layout.spread.unwrap_or(self.layout.spread),
            },
            canvas: CanvasSettings {
                size_units: overlay.canvas.size_units.unwrap_or(self.canvas.size_units),
                margin_units: overlay
                    .canvas
                    .margin_units
                    .unwrap_or(self.canvas.margin_units),
            },
        }
    }

    /// Load settings with layered precedence.
    pub fn load() -> OutlineResult<Self> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Merge global config if present
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Apply environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply WBSMAP_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> OutlineResult<Self> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("WBSMAP").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_path") {
            settings.data_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_string("output_dir") {
            settings.output_dir = PathBuf::from(val);
        }
        if let Ok(val) = config.get_float("layout.radius_step") {
            settings.layout.radius_step = val;
        }
        if let Ok(val) = config.get_float("layout.spread") {
            settings.layout.spread = val;
        }
        if let Ok(val) = config.get_float("canvas.size_units") {
            settings.canvas.size_units = val;
        }
        if let Ok(val) = config.get_float("canvas.margin_units") {
            settings.canvas.margin_units = val;
        }

        Ok(settings)
    }

    /// Expand shell variables and tilde in path fields.
    fn expand_paths(&mut self) {
        self.data_path = crate::util::path::expand_user(&self.data_path);
        self.output_dir = crate::util::path::expand_user(&self.output_dir);
    }
}
