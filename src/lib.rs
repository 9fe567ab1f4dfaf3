#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shortcuts;
pub mod state;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use command::Command;
pub use config::SketchConfig;
pub use document::Document;
pub use element::{Drawable, Element};
pub use error::{ConfigError, ExportError, SketchError};
pub use export::{ExportOutcome, Exporter};
pub use input::{InputController, InputEvent, InputHandler};
pub use renderer::{Overlay, Redraw};
pub use state::SketchState;
pub use tool::{MarkerStyle, Preview, ToolState};
