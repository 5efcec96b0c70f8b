//! Ranked example selection.
//!
//! [`RankedContentTypes`] orders the content-types of a media type map:
//! preferred types first (in preference order, when present), then the
//! remaining ones in document order. [`ResolvedExamples`] walks that ranking
//! lazily and yields one resolved example per content-type that has one.
//! Within a descriptor's `examples`, a failed external fetch moves on to the
//! next entry; when every entry fails the content-type is skipped.

use tracing::{debug, warn};

use crate::core::error::{Error, Result};
use crate::openapi::{ContentDescriptor, ExampleObject, MediaTypeMap};
use crate::renderer::format::ExampleValue;
use crate::renderer::traits::ExampleFetcher;

/// Content-types of a map in the order they are tried
#[derive(Debug, Clone)]
pub struct RankedContentTypes<'a> {
    content: &'a MediaTypeMap,
    preference: &'a [String],
    preferred_pos: usize,
    natural_pos: usize,
}

impl<'a> RankedContentTypes<'a> {
    pub fn new(content: &'a MediaTypeMap, preference: &'a [String]) -> Self {
        Self {
            content,
            preference,
            preferred_pos: 0,
            natural_pos: 0,
        }
    }
}

impl<'a> Iterator for RankedContentTypes<'a> {
    type Item = (&'a str, &'a ContentDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        while self.preferred_pos < self.preference.len() {
            let pos = self.preferred_pos;
            self.preferred_pos += 1;

            let wanted = &self.preference[pos];
            if self.preference[..pos].contains(wanted) {
                continue;
            }
            if let Some((content_type, descriptor)) = self.content.get_key_value(wanted.as_str()) {
                return Some((content_type.as_str(), descriptor));
            }
        }

        while let Some((content_type, descriptor)) = self.content.get_index(self.natural_pos) {
            self.natural_pos += 1;
            // Already tried in the preferred pass
            if self.preference.contains(content_type) {
                continue;
            }
            return Some((content_type.as_str(), descriptor));
        }

        None
    }
}

/// An example chosen for a content-type
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedExample<'a> {
    pub content_type: &'a str,
    pub value: ExampleValue,
}

/// Lazily resolved examples, best candidate first
pub struct ResolvedExamples<'a, F: ?Sized> {
    ranked: RankedContentTypes<'a>,
    fetcher: &'a F,
}

impl<'a, F: ExampleFetcher + ?Sized> ResolvedExamples<'a, F> {
    pub fn new(ranked: RankedContentTypes<'a>, fetcher: &'a F) -> Self {
        Self { ranked, fetcher }
    }
}

impl<'a, F: ExampleFetcher + ?Sized> Iterator for ResolvedExamples<'a, F> {
    type Item = ResolvedExample<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        for (content_type, descriptor) in self.ranked.by_ref() {
            match resolve_descriptor(content_type, descriptor, self.fetcher) {
                Some(value) => {
                    debug!(content_type, "Selected example");
                    return Some(ResolvedExample {
                        content_type,
                        value,
                    });
                }
                None => debug!(content_type, "No usable example"),
            }
        }
        None
    }
}

/// Pick the example of a single descriptor, if any resolves
pub fn resolve_descriptor<F: ExampleFetcher + ?Sized>(
    content_type: &str,
    descriptor: &ContentDescriptor,
    fetcher: &F,
) -> Option<ExampleValue> {
    match descriptor {
        ContentDescriptor::Examples(entries) => entries.iter().find_map(|(name, example)| {
            resolve_example_object(content_type, name, example, fetcher)
        }),
        ContentDescriptor::Example(value) | ContentDescriptor::SchemaExample(value) => {
            Some(ExampleValue::from(value)).filter(|v| !v.is_empty())
        }
        ContentDescriptor::NoExample => None,
    }
}

/// Resolve one `examples` entry; failed fetches are logged and yield `None`
pub fn resolve_example_object<F: ExampleFetcher + ?Sized>(
    content_type: &str,
    name: &str,
    example: &ExampleObject,
    fetcher: &F,
) -> Option<ExampleValue> {
    match example {
        ExampleObject::Value(value) => Some(ExampleValue::from(value)).filter(|v| !v.is_empty()),
        ExampleObject::External(url) => match fetch_external(url, fetcher) {
            Ok(body) => {
                let value = ExampleValue::Text(body);
                if value.is_empty() {
                    warn!(
                        content_type,
                        example = name,
                        url = %url,
                        "External example is empty, trying the next one"
                    );
                    return None;
                }
                Some(value)
            }
            Err(e) => {
                warn!(
                    content_type,
                    example = name,
                    url = %url,
                    error = %e,
                    "Failed to retrieve external example, trying the next one"
                );
                None
            }
        },
    }
}

/// GET an external example and keep its body verbatim
fn fetch_external<F: ExampleFetcher + ?Sized>(url: &str, fetcher: &F) -> Result<String> {
    let response = fetcher.get(url)?;
    if !response.is_success() {
        return Err(Error::fetch(url, format!("HTTP {}", response.status)));
    }
    debug!(
        url,
        content_type = response.content_type.as_deref().unwrap_or(""),
        "Fetched external example"
    );
    Ok(response.body)
}
