//! httpdomain content renderer.
//!
//! [`HttpDomainRenderer::render_content`] turns an OpenAPI media type map into
//! the lines of one `.. sourcecode:: http` block:
//!
//! ```text
//! .. sourcecode:: http
//!
//!    Content-Type: application/json
//!
//!    {
//!      "foo": "bar"
//!    }
//! ```
//!
//! The content-type is chosen by the configured preference list, falling back
//! to document order; within it, `examples` beat `example`, which beats
//! `schema.example`. External examples are fetched synchronously and a failed
//! fetch only skips that entry. When nothing resolves, no lines are produced.
//!
//! # Examples
//!
//! ```
//! use openapi_httpdomain::core::RendererConfig;
//! use openapi_httpdomain::openapi::{ContentDescriptor, MediaTypeMap};
//! use openapi_httpdomain::renderer::{ExampleFetcher, FetchResponse, HttpDomainRenderer};
//! use openapi_httpdomain::core::Result;
//! use serde_json::json;
//!
//! struct Offline;
//!
//! impl ExampleFetcher for Offline {
//!     fn get(&self, url: &str) -> Result<FetchResponse> {
//!         Err(openapi_httpdomain::core::Error::fetch(url, "offline"))
//!     }
//! }
//!
//! let renderer = HttpDomainRenderer::with_fetcher(RendererConfig::default(), Offline);
//! let mut content = MediaTypeMap::new();
//! content.insert("text/csv".to_string(), ContentDescriptor::Example(json!("spam,42")));
//!
//! let lines: Vec<String> = renderer.render_content(&content).collect();
//! assert_eq!(lines[2], "   Content-Type: text/csv");
//! assert_eq!(lines[4], "   spam,42");
//! ```

pub mod candidates;
pub mod format;
pub mod traits;

pub use candidates::{RankedContentTypes, ResolvedExample, ResolvedExamples};
pub use format::{ExampleValue, SourcecodeBlock};
pub use traits::{ExampleFetcher, FetchResponse};

use serde_json::Value as JsonValue;

use crate::core::config::{MarkupFlavor, RendererConfig};
use crate::core::error::Result;
use crate::infrastructure::HttpExampleFetcher;
use crate::openapi::{MediaTypeMap, parse_media_type_map};

/// Renders OpenAPI media type examples as httpdomain `sourcecode` blocks
///
/// Holds only immutable configuration and the fetcher, so one instance can
/// be shared across threads and reused for any number of calls.
#[derive(Debug, Clone)]
pub struct HttpDomainRenderer<F = HttpExampleFetcher> {
    config: RendererConfig,
    fetcher: F,
}

impl HttpDomainRenderer<HttpExampleFetcher> {
    /// Renderer that fetches external examples over HTTP
    pub fn new(config: RendererConfig) -> Result<Self> {
        let fetcher = HttpExampleFetcher::new(config.fetch_timeout())?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: ExampleFetcher> HttpDomainRenderer<F> {
    pub fn with_fetcher(config: RendererConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    pub fn markup(&self) -> MarkupFlavor {
        self.config.markup
    }

    pub fn response_example_preference(&self) -> &[String] {
        &self.config.response_example_preference
    }

    /// Every content-type that resolves to an example, best first
    pub fn examples<'a>(&'a self, content: &'a MediaTypeMap) -> ResolvedExamples<'a, F> {
        ResolvedExamples::new(
            RankedContentTypes::new(content, &self.config.response_example_preference),
            &self.fetcher,
        )
    }

    /// Lines of the block for the best example in `content`
    ///
    /// Nothing is resolved or fetched until the iterator is first advanced.
    pub fn render_content<'a>(
        &'a self,
        content: &'a MediaTypeMap,
    ) -> impl Iterator<Item = String> + 'a {
        self.examples(content)
            .take(1)
            .flat_map(|example| SourcecodeBlock::new(example.content_type, &example.value).into_lines())
    }

    /// Like [`render_content`](Self::render_content), for an untyped `content` mapping
    ///
    /// Fails with `MalformedInput` when `content` is not shaped like a media
    /// type map.
    pub fn render_content_value(&self, content: &JsonValue) -> Result<Vec<String>> {
        let content = parse_media_type_map(content)?;
        Ok(self.render_content(&content).collect())
    }
}
