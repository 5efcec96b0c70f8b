//! OpenAPI input model: media type maps and the documents that contain them

pub mod document;
pub mod media_type;

pub use document::{ContentOrigin, ContentSection, HttpMethod, OpenApiDocument};
pub use media_type::{ContentDescriptor, ExampleObject, MediaTypeMap, parse_media_type_map};
