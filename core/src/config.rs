use crate::interaction::Viewport;
use crate::render::Rgb;
use crate::scene::LinePicking;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Colors and sizes handed to the render collaborator with every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub background: Rgb,
    pub point_color: Rgb,
    pub line_color: Rgb,
    pub point_size: f32,
    pub line_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            background: Rgb::grey(128.0 / 255.0),
            point_color: Rgb::RED,
            line_color: Rgb::CYAN,
            point_size: 10.0,
            line_width: 3.0,
        }
    }
}

/// Editor settings. Every field is optional in JSON and falls back to the
/// default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub window_width: u32,
    pub window_height: u32,
    /// World-unit distance within which a click selects a line.
    pub pick_threshold: f32,
    /// Absolute cap on the accepted pick distance.
    pub pick_distance_cap: f32,
    /// Abandon a half-drawn line, a pending intersect selection and an
    /// active drag when the mode changes.
    pub cancel_gestures_on_mode_switch: bool,
    pub style: RenderStyle,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let picking = LinePicking::default();
        Self {
            window_width: 600,
            window_height: 600,
            pick_threshold: picking.threshold,
            pick_distance_cap: picking.distance_cap,
            cancel_gestures_on_mode_switch: true,
            style: RenderStyle::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !is_positive(self.pick_threshold) {
            return Err(ConfigError::Invalid(format!(
                "pick_threshold must be positive, got {}",
                self.pick_threshold
            )));
        }
        if !is_positive(self.pick_distance_cap) {
            return Err(ConfigError::Invalid(format!(
                "pick_distance_cap must be positive, got {}",
                self.pick_distance_cap
            )));
        }
        if !is_positive(self.style.point_size) || !is_positive(self.style.line_width) {
            return Err(ConfigError::Invalid("point_size and line_width must be positive".into()));
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window_width, self.window_height)
    }

    pub fn line_picking(&self) -> LinePicking {
        LinePicking {
            threshold: self.pick_threshold,
            distance_cap: self.pick_distance_cap,
        }
    }
}

/// False for NaN as well as for zero and negative values.
fn is_positive(value: f32) -> bool {
    value > 0.0
}
