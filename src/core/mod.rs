//! Configuration and error types shared by the renderer and the CLI.

pub mod config;
pub mod error;

pub use config::{MarkupFlavor, RendererConfig};
pub use error::{Error, Result};
