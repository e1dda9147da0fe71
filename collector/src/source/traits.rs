//! Feed Source Trait
//!
//! Lets the pipeline run against live feeds or canned entries.

use async_trait::async_trait;

use super::rss::FeedEntry;
use crate::error::CollectResult;

#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Entries for one search query, in feed order
    async fn fetch(&self, query: &str) -> CollectResult<Vec<FeedEntry>>;
}
