//! Port interfaces for the renderer

use crate::core::error::Result;

/// Response to a single GET issued for an `externalValue`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl FetchResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Retrieves external examples
///
/// Implementations return `Err` only for transport failures; any response
/// that arrives, whatever its status, is returned as a [`FetchResponse`].
pub trait ExampleFetcher: Send + Sync {
    /// Issue one blocking GET for `url`
    fn get(&self, url: &str) -> Result<FetchResponse>;
}

impl<F: ExampleFetcher + ?Sized> ExampleFetcher for &F {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        (**self).get(url)
    }
}

impl<F: ExampleFetcher + ?Sized> ExampleFetcher for Box<F> {
    fn get(&self, url: &str) -> Result<FetchResponse> {
        (**self).get(url)
    }
}
