//! Google News Feed Source
//!
//! Fetches the Korean-edition search RSS for a query.

use async_trait::async_trait;
use reqwest::Client;
use url::form_urlencoded;

use super::rss::{parse_feed, FeedEntry};
use super::traits::FeedSource;
use crate::config::Config;
use crate::error::{CollectError, CollectResult};

/// Search feed URL for `query` (spaces encoded as `+`)
pub fn feed_url(base: &str, query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
    format!("{}{}", base, encoded)
}

pub struct GoogleNewsSource {
    client: Client,
    base: String,
}

impl GoogleNewsSource {
    pub fn new(config: &Config) -> CollectResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("regwatch-collector/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| CollectError::Http {
                url: config.feed_base.clone(),
                source,
            })?;
        Ok(Self {
            client,
            base: config.feed_base.clone(),
        })
    }
}

#[async_trait]
impl FeedSource for GoogleNewsSource {
    async fn fetch(&self, query: &str) -> CollectResult<Vec<FeedEntry>> {
        let url = feed_url(&self.base, query);
        tracing::debug!(%url, "fetching feed");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CollectError::Http { url: url.clone(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CollectError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| CollectError::Http { url: url.clone(), source })?;

        let entries = parse_feed(&body)?;
        tracing::debug!(%url, count = entries.len(), "parsed feed");
        Ok(entries)
    }
}
