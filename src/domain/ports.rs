use crate::utils::error::Result;
use async_trait::async_trait;

/// Network collaborator. The scraping core never builds HTTP clients
/// itself; everything that touches the wire comes in through here.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a URL and return the response body. Non-2xx statuses are
    /// errors.
    async fn fetch(&self, url: &str) -> Result<String>;
}
