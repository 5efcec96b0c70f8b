//! OpenAPI "Media Type Object" model.
//!
//! A [`MediaTypeMap`] maps content-types to [`ContentDescriptor`]s in document
//! order. Each descriptor is reduced at parse time to the single example
//! source that wins under OpenAPI precedence (`examples`, then `example`,
//! then `schema.example`), so later stages never probe optional fields.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;

use crate::core::error::{Error, Result};

/// Ordered mapping from content-type to its descriptor
pub type MediaTypeMap = IndexMap<String, ContentDescriptor>;

/// One entry of a media type's `examples` mapping
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleObject {
    /// Inline `value`
    Value(JsonValue),
    /// `externalValue` URL, fetched at render time
    External(String),
}

impl ExampleObject {
    /// Parse an example object; `name` only feeds error messages
    pub fn from_json(name: &str, json: &JsonValue) -> Result<Self> {
        let object = json.as_object().ok_or_else(|| {
            Error::malformed(format!("example '{name}' is not an object"))
        })?;

        if let Some(value) = present(object.get("value")) {
            return Ok(Self::Value(value.clone()));
        }

        match object.get("externalValue") {
            Some(JsonValue::String(url)) => Ok(Self::External(url.clone())),
            Some(other) => Err(Error::malformed(format!(
                "example '{name}' has a non-string externalValue: {other}"
            ))),
            // An explicit `value: null` is kept and resolves to nothing
            None if object.contains_key("value") => Ok(Self::Value(JsonValue::Null)),
            None => Err(Error::malformed(format!(
                "example '{name}' has neither value nor externalValue"
            ))),
        }
    }
}

/// A media type reduced to the example source with the highest precedence
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContentDescriptor {
    /// Non-empty `examples` mapping, in insertion order
    Examples(IndexMap<String, ExampleObject>),
    /// Inline `example`
    Example(JsonValue),
    /// `schema.example`
    SchemaExample(JsonValue),
    /// Nothing to render
    #[default]
    NoExample,
}

impl ContentDescriptor {
    /// Build an `Examples` descriptor from `(name, example)` pairs
    pub fn examples<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, ExampleObject)>,
        S: Into<String>,
    {
        let entries: IndexMap<String, ExampleObject> = entries
            .into_iter()
            .map(|(name, example)| (name.into(), example))
            .collect();
        if entries.is_empty() {
            Self::NoExample
        } else {
            Self::Examples(entries)
        }
    }

    /// Parse a media type object
    pub fn from_json(json: &JsonValue) -> Result<Self> {
        let object = json
            .as_object()
            .ok_or_else(|| Error::malformed(format!("content descriptor is not an object: {json}")))?;

        if let Some(examples) = object.get("examples") {
            let examples = examples
                .as_object()
                .ok_or_else(|| Error::malformed("examples is not an object"))?;
            if !examples.is_empty() {
                let entries = examples
                    .iter()
                    .map(|(name, example)| Ok((name.clone(), ExampleObject::from_json(name, example)?)))
                    .collect::<Result<IndexMap<_, _>>>()?;
                return Ok(Self::Examples(entries));
            }
        }

        if let Some(example) = present(object.get("example")) {
            return Ok(Self::Example(example.clone()));
        }

        // Non-object schemas (e.g. OpenAPI 3.1 boolean schemas) carry no example
        let schema_example = object
            .get("schema")
            .and_then(|schema| schema.as_object())
            .and_then(|schema| present(schema.get("example")));

        Ok(match schema_example {
            Some(example) => Self::SchemaExample(example.clone()),
            None => Self::NoExample,
        })
    }
}

/// `null` counts as absent
fn present(value: Option<&JsonValue>) -> Option<&JsonValue> {
    value.filter(|v| !v.is_null())
}

/// Parse a whole `content` mapping, keeping document order
pub fn parse_media_type_map(json: &JsonValue) -> Result<MediaTypeMap> {
    let object = json
        .as_object()
        .ok_or_else(|| Error::malformed(format!("media type map is not an object: {json}")))?;

    object
        .iter()
        .map(|(content_type, descriptor)| {
            Ok((content_type.clone(), ContentDescriptor::from_json(descriptor)?))
        })
        .collect()
}
