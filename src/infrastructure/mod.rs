//! Infrastructure layer - concrete implementations of renderer ports

pub mod document_loader;
pub mod http_fetcher;

pub use document_loader::DocumentLoader;
pub use http_fetcher::HttpExampleFetcher;
