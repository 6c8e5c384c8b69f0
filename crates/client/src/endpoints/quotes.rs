use super::wire::WireQuote;
use crate::{
    client::TronaldClient,
    error_handling::{handle_http_response, parse_json_response},
};
use tracing::{debug, trace};
use tronald_core::{error::require_non_empty, Quote, Result};
use url::Url;

impl TronaldClient {
    /// Fetch the quote with the given id.
    ///
    /// An empty id is rejected before any request is sent.
    pub async fn get_quote(&self, id: &str) -> Result<Quote> {
        require_non_empty("id", id)?;
        let url = self.quote_url(id)?;

        trace!(id = %id, url = %url, "Requesting quote");

        self.fetch_quote(url, "quote").await
    }

    /// Fetch a random quote, restricted to `tag` when one is given
    pub async fn get_random_quote(&self, tag: Option<&str>) -> Result<Quote> {
        let url = self.random_quote_url(tag)?;

        trace!(tag = ?tag, url = %url, "Requesting random quote");

        self.fetch_quote(url, "random quote").await
    }

    async fn fetch_quote(&self, url: Url, context: &str) -> Result<Quote> {
        let response = self.inner_client().get(url).send().await?;
        let response = handle_http_response(response, context).await?;
        let wire: WireQuote = parse_json_response(response, context).await?;
        let quote = Quote::from(wire);

        debug!(
            id = %quote.id,
            tags = quote.tags.len(),
            has_source = quote.source_url.is_some(),
            "{context} fetched successfully"
        );

        Ok(quote)
    }
}
