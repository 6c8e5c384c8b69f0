use crate::config::ClientConfig;
use reqwest::Client;
use std::sync::Arc;
use tronald_core::{
    constants::{QUOTE_PATH, RANDOM_QUOTE_PATH, SEARCH_QUOTE_PATH, TAGS_PATH},
    Pageable, Result,
};
use url::Url;

/// Client for the tronalddump.io API.
///
/// Holds only static configuration and a connection pool, so clones are cheap
/// and may be used from independent tasks at the same time. Every operation is
/// a single request with no retries.
#[derive(Debug, Clone)]
pub struct TronaldClient {
    client: Client,
    config: Arc<ClientConfig>,
}

impl TronaldClient {
    /// Create a client for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn inner_client(&self) -> &Client {
        &self.client
    }

    fn resource_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}{path}",
            self.config.normalized_base_url()
        ))?)
    }

    pub fn tags_url(&self) -> Result<Url> {
        self.resource_url(TAGS_PATH)
    }

    /// The id is percent-encoded as a single path segment
    pub fn quote_url(&self, id: &str) -> Result<Url> {
        self.resource_url(&format!("{QUOTE_PATH}/{}", urlencoding::encode(id)))
    }

    pub fn random_quote_url(&self, tag: Option<&str>) -> Result<Url> {
        match tag {
            Some(tag) => self.resource_url(&format!(
                "{RANDOM_QUOTE_PATH}?tag={}",
                urlencoding::encode(tag)
            )),
            None => self.resource_url(RANDOM_QUOTE_PATH),
        }
    }

    pub fn search_url(&self, query: &str, pageable: Pageable) -> Result<Url> {
        self.resource_url(&format!(
            "{SEARCH_QUOTE_PATH}?query={}&page={}&size={}",
            urlencoding::encode(query),
            pageable.page(),
            pageable.size()
        ))
    }
}
