use egui::{Color32, Pos2};

use crate::config::SketchConfig;

mod preview;
mod sticker_set;

pub use preview::Preview;
pub use sticker_set::StickerSet;

/// The two marker weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    #[default]
    Thin,
    Thick,
}

impl MarkerStyle {
    pub fn name(&self) -> &'static str {
        match self {
            MarkerStyle::Thin => "Thin",
            MarkerStyle::Thick => "Thick",
        }
    }
}

/// Current tool selection.
///
/// Marker mode and an armed sticker are mutually exclusive. Arming a sticker
/// leaves the marker style and color untouched, so once the sticker is placed
/// (or a marker is picked) drawing resumes with the previous marker.
#[derive(Debug, Clone)]
pub struct ToolState {
    marker: MarkerStyle,
    color: Color32,
    armed_sticker: Option<String>,
    stickers: StickerSet,
    thin_width: f32,
    thick_width: f32,
    sticker_size: f32,
    marker_preview_alpha: f32,
    sticker_preview_alpha: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(&SketchConfig::default())
    }
}

impl ToolState {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            marker: MarkerStyle::Thin,
            color: config.default_color(),
            armed_sticker: None,
            stickers: StickerSet::new(config.builtin_stickers.iter().cloned()),
            thin_width: config.thin_width,
            thick_width: config.thick_width,
            sticker_size: config.sticker_size,
            marker_preview_alpha: config.marker_preview_alpha,
            sticker_preview_alpha: config.sticker_preview_alpha,
        }
    }

    /// Select a marker, disarming any sticker.
    pub fn select_marker(&mut self, style: MarkerStyle) {
        log::info!("Marker selected: {}", style.name());
        self.marker = style;
        self.armed_sticker = None;
    }

    /// Arm a sticker for the next press, leaving marker mode.
    pub fn arm_sticker(&mut self, glyph: impl Into<String>) {
        let glyph = glyph.into();
        log::info!("Sticker armed: {}", glyph);
        self.armed_sticker = Some(glyph);
    }

    /// Arm the sticker at `index` in the sticker set. Returns false for an unknown index.
    pub fn arm_sticker_at(&mut self, index: usize) -> bool {
        match self.stickers.get(index).map(str::to_owned) {
            Some(glyph) => {
                self.arm_sticker(glyph);
                true
            }
            None => false,
        }
    }

    /// Consume the armed sticker, returning to marker mode.
    pub fn take_armed_sticker(&mut self) -> Option<String> {
        self.armed_sticker.take()
    }

    /// Add a custom sticker to the set and arm it. Blank input changes nothing.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        match self.stickers.add_custom(text).map(str::to_owned) {
            Some(glyph) => {
                log::info!("Custom sticker added: {}", glyph);
                self.arm_sticker(glyph);
                true
            }
            None => {
                log::warn!("Ignoring empty custom sticker");
                false
            }
        }
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn marker(&self) -> MarkerStyle {
        self.marker
    }

    /// The marker shown as selected, or `None` while a sticker is armed.
    pub fn selected_marker(&self) -> Option<MarkerStyle> {
        match self.armed_sticker {
            Some(_) => None,
            None => Some(self.marker),
        }
    }

    pub fn armed_sticker(&self) -> Option<&str> {
        self.armed_sticker.as_deref()
    }

    pub fn stickers(&self) -> &StickerSet {
        &self.stickers
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    /// Line width of the active marker.
    pub fn line_width(&self) -> f32 {
        match self.marker {
            MarkerStyle::Thin => self.thin_width,
            MarkerStyle::Thick => self.thick_width,
        }
    }

    /// Preview of the current selection at `pos`.
    pub fn preview_at(&self, pos: Pos2) -> Preview {
        match &self.armed_sticker {
            Some(glyph) => Preview::Sticker {
                glyph: glyph.clone(),
                center: pos,
                size: self.sticker_size,
                alpha: self.sticker_preview_alpha,
            },
            None => Preview::Marker {
                center: pos,
                radius: self.line_width(),
                color: self.color,
                alpha: self.marker_preview_alpha,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_widths_follow_style() {
        let mut tools = ToolState::default();
        assert_eq!(tools.line_width(), 2.0);
        tools.select_marker(MarkerStyle::Thick);
        assert_eq!(tools.line_width(), 6.0);
    }

    #[test]
    fn test_sticker_and_marker_are_exclusive() {
        let mut tools = ToolState::default();
        tools.select_marker(MarkerStyle::Thick);
        tools.arm_sticker("⭐");
        assert_eq!(tools.selected_marker(), None);
        assert_eq!(tools.armed_sticker(), Some("⭐"));

        tools.select_marker(MarkerStyle::Thin);
        assert_eq!(tools.armed_sticker(), None);
        assert_eq!(tools.selected_marker(), Some(MarkerStyle::Thin));
    }

    #[test]
    fn test_placing_sticker_restores_previous_marker() {
        let mut tools = ToolState::default();
        tools.select_marker(MarkerStyle::Thick);
        assert!(tools.arm_sticker_at(0));
        assert_eq!(tools.take_armed_sticker().as_deref(), Some("❤️"));
        assert_eq!(tools.selected_marker(), Some(MarkerStyle::Thick));
        assert_eq!(tools.take_armed_sticker(), None);
    }

    #[test]
    fn test_unknown_sticker_index_is_ignored() {
        let mut tools = ToolState::default();
        assert!(!tools.arm_sticker_at(99));
        assert_eq!(tools.armed_sticker(), None);
    }

    #[test]
    fn test_custom_sticker_is_added_and_armed() {
        let mut tools = ToolState::default();
        let before = tools.stickers().len();
        assert!(tools.add_custom_sticker("🦀"));
        assert_eq!(tools.stickers().len(), before + 1);
        assert_eq!(tools.armed_sticker(), Some("🦀"));

        assert!(!tools.add_custom_sticker(""));
        assert_eq!(tools.stickers().len(), before + 1);
    }

    #[test]
    fn test_preview_follows_selection() {
        let mut tools = ToolState::default();
        tools.set_color(Color32::RED);
        let at = Pos2::new(5.0, 5.0);
        assert_eq!(
            tools.preview_at(at),
            Preview::Marker {
                center: at,
                radius: 2.0,
                color: Color32::RED,
                alpha: 0.3
            }
        );

        tools.arm_sticker("😀");
        assert_eq!(
            tools.preview_at(at),
            Preview::Sticker {
                glyph: "😀".to_owned(),
                center: at,
                size: 32.0,
                alpha: 0.5
            }
        );
    }
}
