use std::path::{Path, PathBuf};

use egui::Color32;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV_VAR: &str = "SKETCHPAD_CONFIG";

/// Sketchpad settings. Every field has a default, so a config file only
/// needs to name the values it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Drawing surface size in surface pixels.
    pub canvas_width: f32,
    pub canvas_height: f32,

    /// Line width of the thin marker.
    pub thin_width: f32,
    /// Line width of the thick marker.
    pub thick_width: f32,
    /// Marker color at startup, as `[r, g, b]`.
    pub default_color: [u8; 3],

    /// Pixel size stickers are drawn at.
    pub sticker_size: f32,
    pub builtin_stickers: Vec<String>,

    pub marker_preview_alpha: f32,
    pub sticker_preview_alpha: f32,

    /// Upscale factor applied to the exported image.
    pub export_scale: f32,
    pub export_file_name: String,
    /// Directory the export is written to (native only).
    pub export_dir: PathBuf,

    /// End an in-progress stroke when the pointer leaves the canvas.
    pub end_stroke_on_leave: bool,
    /// Keep a freshly placed sticker movable until the pointer is released.
    pub sticker_drag_before_commit: bool,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256.0,
            canvas_height: 256.0,
            thin_width: 2.0,
            thick_width: 6.0,
            default_color: [0, 0, 0],
            sticker_size: 32.0,
            builtin_stickers: vec!["❤️".to_owned(), "😀".to_owned(), "⭐".to_owned()],
            marker_preview_alpha: 0.3,
            sticker_preview_alpha: 0.5,
            export_scale: 4.0,
            export_file_name: "sketchpad.png".to_owned(),
            export_dir: PathBuf::from("."),
            end_stroke_on_leave: false,
            sticker_drag_before_commit: false,
        }
    }
}

impl SketchConfig {
    /// Parse a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Load the config named by `SKETCHPAD_CONFIG`, falling back to defaults.
    ///
    /// A broken config file is logged and ignored rather than aborting startup.
    pub fn load() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(err) => {
                    log::warn!("Ignoring config {}: {}", path.display(), err);
                }
            }
        }
        Self::default()
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width, self.canvas_height)
    }

    pub fn default_color(&self) -> Color32 {
        let [r, g, b] = self.default_color;
        Color32::from_rgb(r, g, b)
    }
}
