//! OpenAPI document loading from files or HTTP(S) URLs

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::core::error::{Error, Result};
use crate::openapi::OpenApiDocument;
use crate::renderer::traits::ExampleFetcher;

/// Loads OpenAPI documents, picking the source by its shape
pub struct DocumentLoader<F> {
    fetcher: F,
}

impl<F: ExampleFetcher> DocumentLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Load and parse the document at `source` (path or URL)
    pub fn load(&self, source: &str) -> Result<OpenApiDocument> {
        debug!("DocumentLoader: Loading from source: {source}");

        let (content, content_type) =
            if source.starts_with("http://") || source.starts_with("https://") {
                let response = self.fetcher.get(source)?;
                if !response.is_success() {
                    return Err(Error::document(format!(
                        "HTTP {} when fetching {}",
                        response.status, source
                    )));
                }
                (response.body, response.content_type.unwrap_or_default())
            } else {
                (std::fs::read_to_string(source)?, String::new())
            };

        OpenApiDocument::new(parse_document(source, &content_type, &content)?)
    }
}

/// Parse based on content type or extension; unknown sources try JSON, then YAML
fn parse_document(source: &str, content_type: &str, content: &str) -> Result<JsonValue> {
    if content_type.contains("json") || source.ends_with(".json") {
        Ok(serde_json::from_str(content)?)
    } else if content_type.contains("yaml") || source.ends_with(".yaml") || source.ends_with(".yml")
    {
        Ok(serde_yaml::from_str(content)?)
    } else {
        serde_json::from_str(content)
            .or_else(|_| serde_yaml::from_str(content))
            .map_err(|e| Error::document(format!("Failed to parse OpenAPI document: {e}")))
    }
}
