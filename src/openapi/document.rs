//! Walking an OpenAPI document for renderable `content` mappings.
//!
//! Operations are visited in document order. Local `$ref`s (`#/...`) on
//! request bodies, responses and `examples` entries are resolved against the
//! document root before the media type map is parsed.

// Internal imports (std, crate)
use std::fmt;
use std::str::FromStr;

use crate::core::error::{Error, Result};
use crate::openapi::media_type::{MediaTypeMap, parse_media_type_map};

// External imports (alphabetized)
use serde_json::Value as JsonValue;
use tracing::debug;

/// Longest `$ref` chain followed before giving up
const MAX_REF_DEPTH: usize = 16;

/// HTTP methods an OpenAPI path item may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "get" => Ok(Self::Get),
            "put" => Ok(Self::Put),
            "post" => Ok(Self::Post),
            "delete" => Ok(Self::Delete),
            "options" => Ok(Self::Options),
            "head" => Ok(Self::Head),
            "patch" => Ok(Self::Patch),
            "trace" => Ok(Self::Trace),
            _ => Err(Error::document(format!("Not an HTTP method: {s}"))),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Put => "PUT",
            Self::Post => "POST",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Trace => "TRACE",
        };
        f.write_str(name)
    }
}

/// Where a `content` mapping was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    RequestBody,
    Response(String),
}

impl fmt::Display for ContentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestBody => f.write_str("request"),
            Self::Response(status) => f.write_str(status),
        }
    }
}

/// A `content` mapping together with the operation it belongs to
#[derive(Debug, Clone)]
pub struct ContentSection {
    pub method: HttpMethod,
    pub path: String,
    pub origin: ContentOrigin,
    pub content: MediaTypeMap,
}

impl ContentSection {
    /// One-line heading, e.g. `GET /pets 200`
    pub fn heading(&self) -> String {
        format!("{} {} {}", self.method, self.path, self.origin)
    }
}

/// A loaded OpenAPI document
#[derive(Debug, Clone)]
pub struct OpenApiDocument {
    root: JsonValue,
}

impl OpenApiDocument {
    pub fn new(root: JsonValue) -> Result<Self> {
        if root.get("openapi").and_then(|v| v.as_str()).is_none() {
            return Err(Error::document("Missing OpenAPI version"));
        }
        Ok(Self { root })
    }

    /// Get the title of the API
    pub fn title(&self) -> Option<&str> {
        self.root.get("info")?.get("title")?.as_str()
    }

    /// Follow local `$ref`s until a non-reference value is reached
    pub fn resolve<'a>(&'a self, value: &'a JsonValue) -> Result<&'a JsonValue> {
        let mut current = value;
        for _ in 0..MAX_REF_DEPTH {
            let Some(reference) = current.get("$ref").and_then(|r| r.as_str()) else {
                return Ok(current);
            };
            let pointer = reference
                .strip_prefix('#')
                .ok_or_else(|| Error::document(format!("Unsupported non-local $ref: {reference}")))?;
            current = self
                .root
                .pointer(pointer)
                .ok_or_else(|| Error::document(format!("Unresolvable $ref: {reference}")))?;
        }
        Err(Error::document(format!(
            "$ref chain deeper than {MAX_REF_DEPTH} levels"
        )))
    }

    /// Every request body and response `content` mapping, in document order
    pub fn content_sections(&self) -> Result<Vec<ContentSection>> {
        let mut sections = Vec::new();
        let Some(paths) = self.root.get("paths").and_then(|p| p.as_object()) else {
            return Ok(sections);
        };

        for (path, path_item) in paths {
            let path_item = self.resolve(path_item)?;
            let Some(path_item) = path_item.as_object() else {
                continue;
            };

            for (key, operation) in path_item {
                let Ok(method) = key.parse::<HttpMethod>() else {
                    continue;
                };

                if let Some(body) = operation.get("requestBody") {
                    if let Some(content) = self.resolve(body)?.get("content") {
                        sections.push(ContentSection {
                            method,
                            path: path.clone(),
                            origin: ContentOrigin::RequestBody,
                            content: self.media_type_map(content)?,
                        });
                    }
                }

                let Some(responses) = operation.get("responses").and_then(|r| r.as_object())
                else {
                    continue;
                };
                for (status, response) in responses {
                    if let Some(content) = self.resolve(response)?.get("content") {
                        sections.push(ContentSection {
                            method,
                            path: path.clone(),
                            origin: ContentOrigin::Response(status.clone()),
                            content: self.media_type_map(content)?,
                        });
                    }
                }
            }
        }

        debug!(count = sections.len(), "Collected content sections");
        Ok(sections)
    }

    /// Parse a `content` mapping after resolving `$ref`d examples
    fn media_type_map(&self, content: &JsonValue) -> Result<MediaTypeMap> {
        let mut content = self.resolve(content)?.clone();
        if let Some(media_types) = content.as_object_mut() {
            for descriptor in media_types.values_mut() {
                let Some(examples) = descriptor.get_mut("examples").and_then(|e| e.as_object_mut())
                else {
                    continue;
                };
                for example in examples.values_mut() {
                    if example.get("$ref").is_some() {
                        *example = self.resolve(example)?.clone();
                    }
                }
            }
        }
        parse_media_type_map(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openapi::media_type::{ContentDescriptor, ExampleObject};
    use serde_json::json;

    fn petstore() -> OpenApiDocument {
        OpenApiDocument::new(json!({
            "openapi": "3.0.3",
            "info": {"title": "Petstore", "version": "1.0.0"},
            "paths": {
                "/pets": {
                    "summary": "Pets",
                    "post": {
                        "requestBody": {"$ref": "#/components/requestBodies/NewPet"},
                        "responses": {
                            "201": {"description": "Created"}
                        }
                    },
                    "get": {
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "application/json": {
                                        "examples": {
                                            "cat": {"$ref": "#/components/examples/Cat"}
                                        }
                                    }
                                }
                            },
                            "default": {"$ref": "#/components/responses/Error"}
                        }
                    }
                }
            },
            "components": {
                "examples": {
                    "Cat": {"value": {"name": "Tom"}}
                },
                "requestBodies": {
                    "NewPet": {
                        "content": {"application/json": {"example": {"name": "Rex"}}}
                    }
                },
                "responses": {
                    "Error": {
                        "description": "Error",
                        "content": {"text/plain": {"example": "oops"}}
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_document_requires_openapi_version() {
        let result = OpenApiDocument::new(json!({"info": {"title": "x"}}));
        assert!(matches!(result, Err(Error::Document(_))));
    }

    #[test]
    fn test_title() {
        assert_eq!(petstore().title(), Some("Petstore"));
    }

    #[test]
    fn test_content_sections_in_document_order() {
        let sections = petstore().content_sections().unwrap();
        let headings: Vec<String> = sections.iter().map(|s| s.heading()).collect();
        assert_eq!(
            headings,
            vec!["POST /pets request", "GET /pets 200", "GET /pets default"]
        );
    }

    #[test]
    fn test_refs_are_resolved() {
        let sections = petstore().content_sections().unwrap();

        assert_eq!(
            sections[0].content["application/json"],
            ContentDescriptor::Example(json!({"name": "Rex"}))
        );
        assert_eq!(
            sections[1].content["application/json"],
            ContentDescriptor::examples([("cat", ExampleObject::Value(json!({"name": "Tom"})))])
        );
        assert_eq!(
            sections[2].content["text/plain"],
            ContentDescriptor::Example(json!("oops"))
        );
    }

    #[test]
    fn test_unresolvable_and_remote_refs_fail() {
        let document = petstore();
        let missing = json!({"$ref": "#/components/examples/Dog"});
        let result = document.resolve(&missing);
        assert!(matches!(result, Err(Error::Document(msg)) if msg.contains("Unresolvable")));

        let remote = json!({"$ref": "other.yaml#/Dog"});
        let result = document.resolve(&remote);
        assert!(matches!(result, Err(Error::Document(msg)) if msg.contains("non-local")));
    }

    #[test]
    fn test_ref_cycle_is_bounded() {
        let document = OpenApiDocument::new(json!({
            "openapi": "3.0.0",
            "components": {"examples": {"Loop": {"$ref": "#/components/examples/Loop"}}}
        }))
        .unwrap();
        let looping = json!({"$ref": "#/components/examples/Loop"});
        let result = document.resolve(&looping);
        assert!(matches!(result, Err(Error::Document(msg)) if msg.contains("deeper")));
    }

    #[test]
    fn test_document_without_paths_has_no_sections() {
        let document = OpenApiDocument::new(json!({"openapi": "3.1.0"})).unwrap();
        assert!(document.content_sections().unwrap().is_empty());
    }
}
