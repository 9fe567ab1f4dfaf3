use std::sync::OnceLock;

use ab_glyph::{Font, FontRef, GlyphId, ScaleFont, point};
use egui::{Color32, Pos2, Rect, Vec2};
use image::{Rgba, RgbaImage};

use super::{PenState, Surface};
use crate::element::common::{calculate_bounds, distance_to_line_segment};
use crate::error::SketchError;

/// Largest width or height, in pixels, a raster surface may have.
pub const MAX_RASTER_SIDE: u32 = 16_384;

/// Offscreen RGBA surface with a software rasterizer.
///
/// Every logical coordinate is multiplied by `scale` before it touches the
/// pixel grid, so a 256x256 canvas replayed at scale 4 fills 1024x1024 pixels.
/// Unpainted pixels stay fully transparent.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    pen: PenState,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> Result<Self, SketchError> {
        if width == 0 || height == 0 {
            return Err(SketchError::SurfaceInit(format!(
                "raster surface must not be empty ({width}x{height})"
            )));
        }
        if width > MAX_RASTER_SIDE || height > MAX_RASTER_SIDE {
            return Err(SketchError::SurfaceInit(format!(
                "raster surface {width}x{height} exceeds {MAX_RASTER_SIDE} pixels per side"
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SketchError::SurfaceInit(format!(
                "invalid raster scale {scale}"
            )));
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
            scale,
            pen: PenState::default(),
        })
    }

    /// Create a surface holding a logical canvas of `size`, pre-scaled by `scale`.
    pub fn for_canvas(size: Vec2, scale: f32) -> Result<Self, SketchError> {
        let width = (size.x * scale).round();
        let height = (size.y * scale).round();
        if !(width >= 1.0 && height >= 1.0) {
            return Err(SketchError::SurfaceInit(format!(
                "canvas {}x{} at scale {scale} has no pixels",
                size.x, size.y
            )));
        }
        let max = MAX_RASTER_SIDE as f32;
        if width > max || height > max {
            return Err(SketchError::SurfaceInit(format!(
                "canvas {}x{} at scale {scale} exceeds {MAX_RASTER_SIDE} pixels per side",
                size.x, size.y
            )));
        }
        Self::new(width as u32, height as u32, scale)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn to_device(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x * self.scale, pos.y * self.scale)
    }

    /// Clamp a device-space rect to the pixel grid as `(x0, y0, x1, y1)`, exclusive max.
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.min.x.floor().max(0.0);
        let y0 = rect.min.y.floor().max(0.0);
        let x1 = rect.max.x.ceil().min(self.image.width() as f32);
        let y1 = rect.max.y.ceil().min(self.image.height() as f32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    /// Source-over composite of the pen color at `coverage` onto one pixel.
    fn blend(&mut self, x: i64, y: i64, coverage: f32) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height()) {
            return;
        }
        let [r, g, b, a] = self.pen.color.to_srgba_unmultiplied();
        let src_a = (f32::from(a) / 255.0) * self.pen.alpha.clamp(0.0, 1.0) * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let Rgba(dst) = *self.image.get_pixel(x as u32, y as u32);
        let dst_a = f32::from(dst[3]) / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        let mix = |s: u8, d: u8| {
            let value = (f32::from(s) * src_a + f32::from(d) * dst_a * (1.0 - src_a)) / out_a;
            value.round().clamp(0.0, 255.0) as u8
        };
        let out = [
            mix(r, dst[0]),
            mix(g, dst[1]),
            mix(b, dst[2]),
            (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        ];
        self.image.put_pixel(x as u32, y as u32, Rgba(out));
    }
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(
            self.image.width() as f32 / self.scale,
            self.image.height() as f32 / self.scale,
        )
    }

    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.pen.line_width = width;
    }

    fn set_color(&mut self, color: Color32) {
        self.pen.color = color;
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.pen.alpha = alpha;
    }

    fn set_font_size(&mut self, size: f32) {
        self.pen.font_size = size;
    }

    fn stroke_path(&mut self, points: &[Pos2]) {
        if points.is_empty() {
            return;
        }
        let radius = (self.pen.line_width * self.scale / 2.0).max(0.5);
        let device: Vec<Pos2> = points.iter().map(|p| self.to_device(*p)).collect();
        let Some((x0, y0, x1, y1)) = self.pixel_span(calculate_bounds(&device, radius + 1.0)) else {
            return;
        };

        // Coverage is accumulated for the whole path first so overlapping
        // segments never composite twice.
        let span_w = (x1 - x0) as usize;
        let mut coverage = vec![0.0f32; span_w * (y1 - y0) as usize];
        let segments: Vec<(Pos2, Pos2)> = if device.len() == 1 {
            vec![(device[0], device[0])]
        } else {
            device.windows(2).map(|w| (w[0], w[1])).collect()
        };

        for (start, end) in segments {
            let Some((sx0, sy0, sx1, sy1)) =
                self.pixel_span(calculate_bounds(&[start, end], radius + 1.0))
            else {
                continue;
            };
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let distance = distance_to_line_segment(center, start, end);
                    let cov = (radius + 0.5 - distance).clamp(0.0, 1.0);
                    let index = (y - y0) as usize * span_w + (x - x0) as usize;
                    if cov > coverage[index] {
                        coverage[index] = cov;
                    }
                }
            }
        }

        for (index, cov) in coverage.into_iter().enumerate() {
            if cov > 0.0 {
                let x = i64::from(x0) + (index % span_w) as i64;
                let y = i64::from(y0) + (index / span_w) as i64;
                self.blend(x, y, cov);
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32) {
        let center = self.to_device(center);
        let radius = radius * self.scale;
        if radius <= 0.0 {
            return;
        }
        let Some((x0, y0, x1, y1)) = self.pixel_span(calculate_bounds(&[center], radius + 1.0)) else {
            return;
        };
        for y in y0..y1 {
            for x in x0..x1 {
                let distance = Pos2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                let cov = (radius + 0.5 - distance).clamp(0.0, 1.0);
                if cov > 0.0 {
                    self.blend(i64::from(x), i64::from(y), cov);
                }
            }
        }
    }

    fn fill_text(&mut self, text: &str, center: Pos2) {
        let px = self.pen.font_size * self.scale;
        if px <= 0.0 {
            return;
        }
        let glyphs = shape_line(text);
        if glyphs.is_empty() {
            return;
        }

        let width: f32 = glyphs.iter().map(|(font, id)| font.as_scaled(px).h_advance(*id)).sum();
        let ascent = glyphs
            .iter()
            .map(|(font, _)| font.as_scaled(px).ascent())
            .fold(f32::NEG_INFINITY, f32::max);
        let descent = glyphs
            .iter()
            .map(|(font, _)| font.as_scaled(px).descent())
            .fold(f32::INFINITY, f32::min);

        let center = self.to_device(center);
        let baseline = center.y - (ascent + descent) / 2.0;
        let mut caret = center.x - width / 2.0;

        for (font, id) in glyphs {
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i64, bounds.min.y as i64);
                outlined.draw(|gx, gy, cov| {
                    self.blend(left + i64::from(gx), top + i64::from(gy), cov);
                });
            }
            caret += font.as_scaled(px).h_advance(id);
        }
    }
}

/// Map each drawable character of `text` to the first bundled font that has it.
fn shape_line(text: &str) -> Vec<(&'static FontRef<'static>, GlyphId)> {
    text.chars()
        .filter(|ch| !is_invisible(*ch))
        .filter_map(|ch| {
            let found = fonts().iter().find_map(|font| {
                let id = font.glyph_id(ch);
                (id.0 != 0).then_some((font, id))
            });
            if found.is_none() {
                log::debug!("No bundled font has a glyph for {:?}", ch);
            }
            found
        })
        .collect()
}

/// Variation selectors and joiners only modify neighbouring glyphs.
fn is_invisible(ch: char) -> bool {
    ch.is_control() || matches!(ch, '\u{200D}' | '\u{FE00}'..='\u{FE0F}')
}

fn fonts() -> &'static [FontRef<'static>] {
    static FONTS: OnceLock<Vec<FontRef<'static>>> = OnceLock::new();
    FONTS.get_or_init(|| {
        [
            ("Ubuntu-Light", epaint_default_fonts::UBUNTU_LIGHT),
            ("NotoEmoji-Regular", epaint_default_fonts::NOTO_EMOJI_REGULAR),
            ("emoji-icon-font", epaint_default_fonts::EMOJI_ICON),
        ]
        .into_iter()
        .filter_map(|(name, bytes)| match FontRef::try_from_slice(bytes) {
            Ok(font) => Some(font),
            Err(err) => {
                log::warn!("Skipping bundled font {}: {}", name, err);
                None
            }
        })
        .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(surface: &RasterSurface, x: u32, y: u32) -> u8 {
        surface.image().get_pixel(x, y).0[3]
    }

    #[test]
    fn test_empty_surface_is_rejected() {
        assert!(matches!(
            RasterSurface::new(0, 10, 1.0),
            Err(SketchError::SurfaceInit(_))
        ));
        assert!(RasterSurface::new(10, 10, 0.0).is_err());
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        assert!(matches!(
            RasterSurface::for_canvas(Vec2::splat(256.0), 1.0e9),
            Err(SketchError::SurfaceInit(_))
        ));
        assert!(RasterSurface::new(MAX_RASTER_SIDE + 1, 1, 1.0).is_err());
    }

    #[test]
    fn test_logical_size_accounts_for_scale() {
        let surface = RasterSurface::for_canvas(Vec2::new(256.0, 128.0), 4.0).unwrap();
        assert_eq!(surface.image().dimensions(), (1024, 512));
        assert_eq!(surface.size(), Vec2::new(256.0, 128.0));
    }

    #[test]
    fn test_stroke_paints_along_path_only() {
        let mut surface = RasterSurface::new(40, 40, 1.0).unwrap();
        surface.set_color(Color32::RED);
        surface.set_line_width(4.0);
        surface.stroke_path(&[Pos2::new(5.0, 20.0), Pos2::new(35.0, 20.0)]);

        let on_line = surface.image().get_pixel(20, 20).0;
        assert_eq!(on_line, [255, 0, 0, 255]);
        assert_eq!(alpha_at(&surface, 20, 5), 0);
        assert_eq!(alpha_at(&surface, 20, 35), 0);
    }

    #[test]
    fn test_single_point_stroke_is_a_dot() {
        let mut surface = RasterSurface::new(20, 20, 1.0).unwrap();
        surface.set_line_width(6.0);
        surface.stroke_path(&[Pos2::new(10.0, 10.0)]);
        assert_eq!(alpha_at(&surface, 10, 10), 255);
        assert_eq!(alpha_at(&surface, 0, 0), 0);
    }

    #[test]
    fn test_alpha_is_applied_to_fills() {
        let mut surface = RasterSurface::new(20, 20, 1.0).unwrap();
        surface.set_alpha(0.5);
        surface.fill_circle(Pos2::new(10.0, 10.0), 5.0);
        let a = alpha_at(&surface, 10, 10);
        assert!((127..=128).contains(&a), "alpha was {a}");
    }

    #[test]
    fn test_clear_resets_to_transparent() {
        let mut surface = RasterSurface::new(10, 10, 1.0).unwrap();
        surface.fill_circle(Pos2::new(5.0, 5.0), 4.0);
        surface.clear();
        assert!(surface.image().pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn test_text_is_rasterized_near_center() {
        let mut surface = RasterSurface::new(64, 64, 1.0).unwrap();
        surface.set_font_size(32.0);
        surface.fill_text("A", Pos2::new(32.0, 32.0));
        let painted = surface.image().pixels().filter(|p| p.0[3] > 0).count();
        assert!(painted > 0);
        assert_eq!(alpha_at(&surface, 0, 0), 0);
    }

    #[test]
    fn test_variation_selectors_are_skipped() {
        assert!(is_invisible('\u{FE0F}'));
        assert!(is_invisible('\u{200D}'));
        assert!(!is_invisible('❤'));
    }
}
