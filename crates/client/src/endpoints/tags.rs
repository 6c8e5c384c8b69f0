use super::wire::WireTags;
use crate::{
    client::TronaldClient,
    error_handling::{handle_http_response, parse_json_response},
};
use tracing::{debug, trace};
use tronald_core::Result;

impl TronaldClient {
    /// List every tag known to the API, in server order
    pub async fn list_tags(&self) -> Result<Vec<String>> {
        let url = self.tags_url()?;

        trace!(url = %url, "Requesting tags");

        let response = self.inner_client().get(url).send().await?;
        let response = handle_http_response(response, "tags").await?;
        let tags: WireTags = parse_json_response(response, "tags").await?;

        debug!(count = tags.embedded.len(), "Tags fetched successfully");

        Ok(tags.embedded)
    }
}
