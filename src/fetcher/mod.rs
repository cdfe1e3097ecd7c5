pub mod http_fetcher;

use async_trait::async_trait;

use crate::app::Result;

pub use http_fetcher::HttpFetcher;

/// Access to the content source.
///
/// A cursor is whatever the source handed out as the location of a page;
/// for the HTTP source it is the full request URL. Implementations return
/// the raw response body and leave parsing to the
/// [`Normalizer`](crate::normalizer::Normalizer).
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, cursor: &str) -> Result<Vec<u8>>;
}
