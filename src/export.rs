use std::io::Cursor;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use egui::Vec2;
use image::{ImageFormat, RgbaImage};

use crate::config::SketchConfig;
use crate::document::Document;
use crate::error::ExportError;
use crate::renderer;
use crate::surface::RasterSurface;

/// Result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Where the image went: a file path natively, the download name on the web.
    pub location: String,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// Replays the committed drawing at a fixed upscale and saves it as PNG.
///
/// Only `committed` is read; the redo buffer and any gesture in progress
/// never reach the exported image.
#[derive(Debug, Clone)]
pub struct Exporter {
    canvas_size: Vec2,
    scale: f32,
    file_name: String,
    #[cfg(not(target_arch = "wasm32"))]
    dir: PathBuf,
}

impl Exporter {
    pub fn new(config: &SketchConfig) -> Self {
        Self {
            canvas_size: config.canvas_size(),
            scale: config.export_scale,
            file_name: config.export_file_name.clone(),
            #[cfg(not(target_arch = "wasm32"))]
            dir: config.export_dir.clone(),
        }
    }

    /// Render `committed` onto a fresh transparent surface `scale` times the canvas size.
    pub fn rasterize(&self, document: &Document) -> Result<RgbaImage, ExportError> {
        let mut surface = RasterSurface::for_canvas(self.canvas_size, self.scale)?;
        renderer::replay(&mut surface, document.committed());
        Ok(surface.into_image())
    }

    pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    pub fn export(&self, document: &Document) -> Result<ExportOutcome, ExportError> {
        let image = self.rasterize(document)?;
        let png = Self::encode_png(&image)?;
        let location = self.save(&png)?;
        log::info!(
            "Exported {} drawables to {} ({}x{}, {} bytes)",
            document.committed().len(),
            location,
            image.width(),
            image.height(),
            png.len()
        );
        Ok(ExportOutcome {
            location,
            width: image.width(),
            height: image.height(),
            bytes: png.len(),
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save(&self, png: &[u8]) -> Result<String, ExportError> {
        let path = self.dir.join(&self.file_name);
        std::fs::write(&path, png)?;
        Ok(path.display().to_string())
    }

    #[cfg(target_arch = "wasm32")]
    fn save(&self, png: &[u8]) -> Result<String, ExportError> {
        web::download(&self.file_name, png, "image/png")
            .map_err(|err| ExportError::Download(format!("{err:?}")))?;
        Ok(self.file_name.clone())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast as _, JsValue};

    /// Hand `data` to the browser as a file download.
    pub(super) fn download(file_name: &str, data: &[u8], mime_type: &str) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("No window")?;
        let document = window.document().ok_or("No document")?;

        let uint8_array = js_sys::Uint8Array::from(data);
        let blob_parts = js_sys::Array::new();
        blob_parts.push(&uint8_array);

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::{Color32, Pos2};

    #[test]
    fn test_rasterize_is_four_times_canvas() {
        let exporter = Exporter::new(&SketchConfig::default());
        let image = exporter.rasterize(&Document::new()).unwrap();
        assert_eq!(image.dimensions(), (1024, 1024));
        assert!(image.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_rasterize_scales_strokes() {
        let exporter = Exporter::new(&SketchConfig::default());
        let mut doc = Document::new();
        let mut stroke = factory::create_stroke(Pos2::new(10.0, 10.0), 2.0, Color32::RED);
        crate::element::Element::extend(&mut stroke, Pos2::new(100.0, 10.0));
        doc.commit(stroke);

        let image = exporter.rasterize(&doc).unwrap();
        assert_eq!(image.get_pixel(200, 40).0, [255, 0, 0, 255]);
        assert_eq!(image.get_pixel(200, 60).0[3], 0);
    }

    #[test]
    fn test_encoded_png_has_signature() {
        let image = RgbaImage::new(4, 4);
        let png = Exporter::encode_png(&image).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_zero_scale_fails_to_create_surface() {
        let config = SketchConfig {
            export_scale: 0.0,
            ..SketchConfig::default()
        };
        let err = Exporter::new(&config).rasterize(&Document::new()).unwrap_err();
        assert!(matches!(err, ExportError::Surface(_)));
    }

    #[test]
    fn test_huge_scale_is_refused_before_allocating() {
        let config = SketchConfig {
            export_scale: 1.0e6,
            ..SketchConfig::default()
        };
        let err = Exporter::new(&config).export(&Document::new()).unwrap_err();
        assert!(matches!(err, ExportError::Surface(_)));
    }
}
