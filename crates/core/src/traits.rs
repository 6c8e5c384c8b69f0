use crate::models::{Page, Pageable, Quote};
use crate::Result;
use async_trait::async_trait;

/// The read-only operations of the quotes API.
///
/// Each call performs one round trip and either returns a fully decoded value
/// or exactly one error.
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// All tags, in server order
    async fn list_tags(&self) -> Result<Vec<String>>;

    /// The quote with the given id; an empty id is rejected before any request
    async fn get_quote(&self, id: &str) -> Result<Quote>;

    /// A random quote, restricted to `tag` when one is given
    async fn get_random_quote(&self, tag: Option<&str>) -> Result<Quote>;

    /// One page of quotes matching `query`
    async fn search(&self, query: &str, pageable: Pageable) -> Result<Page<Quote>>;
}
