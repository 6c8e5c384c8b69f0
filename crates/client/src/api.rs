use crate::TronaldClient;
use async_trait::async_trait;
use tronald_core::{Page, Pageable, Quote, QuoteApi, Result};

#[async_trait]
impl QuoteApi for TronaldClient {
    async fn list_tags(&self) -> Result<Vec<String>> {
        TronaldClient::list_tags(self).await
    }

    async fn get_quote(&self, id: &str) -> Result<Quote> {
        TronaldClient::get_quote(self, id).await
    }

    async fn get_random_quote(&self, tag: Option<&str>) -> Result<Quote> {
        TronaldClient::get_random_quote(self, tag).await
    }

    async fn search(&self, query: &str, pageable: Pageable) -> Result<Page<Quote>> {
        TronaldClient::search(self, query, pageable).await
    }
}
