//! Renderer configuration.
//!
//! [`RendererConfig`] carries the options recognised at construction time:
//! the markup flavor used around rendered blocks, the ranked list of preferred
//! response content-types, and the timeout for fetching external examples.
//! It can be built in code or loaded from a TOML file:
//!
//! ```toml
//! markup = "commonmark"
//! response_example_preference = ["application/json", "text/plain"]
//! fetch_timeout_secs = 10
//! ```

// Internal imports (std, crate)
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::core::error::{Error, Result};

// External imports (alphabetized)
use serde::Deserialize;
use tracing::debug;

/// Default timeout for a single external example fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Markup dialect of the surrounding documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum MarkupFlavor {
    /// reStructuredText
    #[default]
    RestructuredText,
    /// Plain Markdown
    Markdown,
    /// CommonMark
    CommonMark,
}

impl MarkupFlavor {
    /// Returns the flavor as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RestructuredText => "restructuredtext",
            Self::Markdown => "markdown",
            Self::CommonMark => "commonmark",
        }
    }
}

impl FromStr for MarkupFlavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "restructuredtext" | "rst" => Ok(Self::RestructuredText),
            "markdown" | "md" => Ok(Self::Markdown),
            "commonmark" => Ok(Self::CommonMark),
            _ => Err(Error::config(format!("Unknown markup flavor: {s}"))),
        }
    }
}

impl TryFrom<String> for MarkupFlavor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for MarkupFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for [`HttpDomainRenderer`](crate::renderer::HttpDomainRenderer)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RendererConfig {
    /// Markup flavor of the surrounding documentation
    pub markup: MarkupFlavor,

    /// Content-types to try first, in order
    pub response_example_preference: Vec<String>,

    /// Timeout in seconds for fetching an `externalValue`
    pub fetch_timeout_secs: u64,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            markup: MarkupFlavor::default(),
            response_example_preference: Vec::new(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

impl RendererConfig {
    /// Load configuration from a TOML file; missing keys take their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading renderer configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.fetch_timeout_secs == 0 {
            return Err(Error::config("fetch_timeout_secs must be greater than zero"));
        }
        Ok(config)
    }

    /// Timeout for a single external example fetch
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_renderer_config_default() {
        let config = RendererConfig::default();
        assert_eq!(config.markup, MarkupFlavor::RestructuredText);
        assert!(config.response_example_preference.is_empty());
        assert_eq!(config.fetch_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_markup_flavor_from_str() {
        assert_eq!(
            "commonmark".parse::<MarkupFlavor>().unwrap(),
            MarkupFlavor::CommonMark
        );
        assert_eq!("RST".parse::<MarkupFlavor>().unwrap(), MarkupFlavor::RestructuredText);
        assert_eq!("md".parse::<MarkupFlavor>().unwrap(), MarkupFlavor::Markdown);
        assert!("asciidoc".parse::<MarkupFlavor>().is_err());
        assert_eq!(MarkupFlavor::Markdown.to_string(), "markdown");
    }

    #[test]
    fn test_renderer_config_from_toml() {
        let config = RendererConfig::from_toml_str(
            r#"
            markup = "commonmark"
            response_example_preference = ["application/json", "text/plain"]
            "#,
        )
        .unwrap();

        assert_eq!(config.markup, MarkupFlavor::CommonMark);
        assert_eq!(
            config.response_example_preference,
            vec!["application/json", "text/plain"]
        );
        assert_eq!(config.fetch_timeout_secs, DEFAULT_FETCH_TIMEOUT_SECS);
    }

    #[test]
    fn test_renderer_config_rejects_unknown_markup() {
        let result = RendererConfig::from_toml_str(r#"markup = "asciidoc""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_renderer_config_rejects_zero_timeout() {
        let result = RendererConfig::from_toml_str("fetch_timeout_secs = 0");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_renderer_config_from_file() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"fetch_timeout_secs = 5\n")
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let config = RendererConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.fetch_timeout(), Duration::from_secs(5));
        assert_eq!(config.markup, MarkupFlavor::RestructuredText);
    }

    #[test]
    fn test_renderer_config_missing_file() {
        let result = RendererConfig::from_file(Path::new("/nonexistent/renderer.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
