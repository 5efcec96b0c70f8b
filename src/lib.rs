//! openapi-httpdomain
//!
//! Selects one representative example from an OpenAPI media type map and
//! renders it as a reStructuredText `.. sourcecode:: http` block annotated
//! with its content type.
#![deny(unsafe_code)]

pub mod core;
pub mod infrastructure;
pub mod openapi;
pub mod renderer;

pub use crate::core::{Error, MarkupFlavor, RendererConfig, Result};
pub use crate::openapi::{ContentDescriptor, ExampleObject, MediaTypeMap};
pub use crate::renderer::HttpDomainRenderer;
