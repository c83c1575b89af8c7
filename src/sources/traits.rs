use async_trait::async_trait;

use crate::domain::{NewsItem, RawEntry, SourceDescriptor};
use crate::errors::NewsResult;

/// Turns a feed document into raw entries, in document order.
pub trait FeedParser: Send + Sync {
    fn parse(&self, bytes: &[u8]) -> NewsResult<Vec<RawEntry>>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch and normalize one source. Failures yield an empty list.
    async fn fetch(&self, source: &SourceDescriptor) -> Vec<NewsItem>;
}
