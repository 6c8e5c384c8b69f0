use super::wire::WireSearchResult;
use crate::{
    client::TronaldClient,
    error_handling::{handle_http_response, parse_json_response},
};
use tracing::{debug, trace};
use tronald_core::{error::require_non_empty, Page, Pageable, Quote, Result, TransportError};

impl TronaldClient {
    /// Search quotes matching `query`, returning the window described by `pageable`.
    ///
    /// The returned page carries the requested pageable and the total reported
    /// by the server. An empty query is rejected before any request is sent.
    pub async fn search(&self, query: &str, pageable: Pageable) -> Result<Page<Quote>> {
        require_non_empty("query", query)?;
        let url = self.search_url(query, pageable)?;

        trace!(
            query = %query,
            page = pageable.page(),
            size = pageable.size(),
            url = %url,
            "Searching quotes"
        );

        let response = self.inner_client().get(url).send().await?;
        let response = handle_http_response(response, "quote search").await?;
        let result: WireSearchResult = parse_json_response(response, "quote search").await?;

        let (quotes, total) = result.into_parts();
        let page = Page::new(quotes, pageable, total)
            .map_err(|e| TransportError::invalid_payload("quote search", e.to_string()))?;

        debug!(
            query = %query,
            total = page.total_elements(),
            returned = page.number_of_elements(),
            "Search completed successfully"
        );

        Ok(page)
    }

    /// Search with the default window (page 1, 25 quotes)
    pub async fn search_first_page(&self, query: &str) -> Result<Page<Quote>> {
        self.search(query, Pageable::default()).await
    }

    /// Fetch the page after `page` for the same query, or `None` if `page` is the last one.
    ///
    /// `None` follows [`Page::has_next`], which already reports the
    /// second-to-last page as last, so a walk driven by this method never
    /// fetches the final page. Request it with [`Page::last_pageable`].
    pub async fn search_next(
        &self,
        query: &str,
        page: &Page<Quote>,
    ) -> Result<Option<Page<Quote>>> {
        match page.next_pageable() {
            Some(next) => self.search(query, next).await.map(Some),
            None => Ok(None),
        }
    }
}
