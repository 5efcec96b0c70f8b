//! Error handling for the httpdomain example renderer.
//!
//! This module defines the main error type `Error` used throughout the library,
//! along with a convenient `Result` type alias. Failed external example fetches
//! are recovered inside the renderer and only surface here when a fetcher is
//! called directly.
//!
//! # Examples
//!
//! ```
//! use openapi_httpdomain::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::malformed("examples entry has no value"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use thiserror::Error;

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for renderer operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Input that does not have the shape of an OpenAPI media type map
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// External example could not be retrieved
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// OpenAPI document could not be loaded or walked
    #[error("OpenAPI document error: {0}")]
    Document(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new malformed input error
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create a new document error
    pub fn document<S: Into<String>>(msg: S) -> Self {
        Self::Document(msg.into())
    }

    /// Create a new fetch error for `url`
    pub fn fetch<U: Into<String>, R: ToString>(url: U, reason: R) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
