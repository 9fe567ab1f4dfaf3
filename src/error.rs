use thiserror::Error;

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum SketchError {
    /// No renderable surface could be created. Startup cannot continue.
    #[error("failed to initialize drawing surface: {0}")]
    SurfaceInit(String),
}

/// Errors raised while exporting the drawing to an image file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export surface unavailable: {0}")]
    Surface(#[from] SketchError),
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser download failed: {0}")]
    Download(String),
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}
