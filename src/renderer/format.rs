//! Example text normalization and `sourcecode` block layout.

use serde_json::Value as JsonValue;

/// Indentation of every line inside the directive body
pub const BLOCK_INDENT: &str = "   ";

/// Directive opening every rendered block
pub const BLOCK_HEADER: &str = ".. sourcecode:: http";

/// A selected example, before it is turned into text
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleValue {
    /// Used verbatim, even if it looks like JSON
    Text(String),
    /// Serialized as pretty-printed JSON
    Structured(JsonValue),
}

impl From<&JsonValue> for ExampleValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::String(text) => Self::Text(text.clone()),
            other => Self::Structured(other.clone()),
        }
    }
}

impl ExampleValue {
    /// Whether there is nothing worth rendering: `null` or a blank string
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.strip_suffix('\n').unwrap_or(text).is_empty(),
            Self::Structured(value) => value.is_null(),
        }
    }

    /// Example as text: strings lose one trailing newline, everything else
    /// becomes 2-space indented JSON with keys in document order
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.strip_suffix('\n').unwrap_or(text).to_string(),
            Self::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

/// The rendered form of one example
#[derive(Debug, Clone, PartialEq)]
pub struct SourcecodeBlock {
    pub content_type: String,
    pub body: String,
}

impl SourcecodeBlock {
    pub fn new(content_type: impl Into<String>, example: &ExampleValue) -> Self {
        Self {
            content_type: content_type.into(),
            body: example.to_text(),
        }
    }

    /// Lines of the block, without trailing newlines
    pub fn into_lines(self) -> std::vec::IntoIter<String> {
        let mut lines = vec![
            BLOCK_HEADER.to_string(),
            String::new(),
            format!("{BLOCK_INDENT}Content-Type: {}", self.content_type),
            String::new(),
        ];
        lines.extend(self.body.lines().map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{BLOCK_INDENT}{line}")
            }
        }));
        lines.into_iter()
    }
}
